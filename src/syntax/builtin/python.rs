//! Python language configuration

use crate::syntax::registry::LanguageConfig;

const KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "try", "except",
    "finally", "with", "as", "from", "import", "return", "yield", "pass",
    "break", "continue", "lambda", "in", "is", "and", "or", "not", "None",
    "True", "False", "async", "await", "global", "nonlocal", "del", "assert",
];

const BUILTINS: &[&str] = &[
    "print", "len", "range", "list", "dict", "set", "str", "int", "float",
    "bool", "type", "isinstance", "enumerate", "zip", "map", "filter",
];

/// Create Python configuration
pub fn python_config() -> LanguageConfig {
    LanguageConfig::new(KEYWORDS.iter().copied())
        .with_builtins(BUILTINS.iter().copied())
        .with_line_comment("#")
}
