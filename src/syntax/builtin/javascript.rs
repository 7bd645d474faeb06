//! JavaScript language configuration

use crate::syntax::registry::LanguageConfig;

const KEYWORDS: &[&str] = &[
    "function", "var", "let", "const", "if", "else", "for", "while", "do",
    "switch", "case", "default", "break", "continue", "return", "try", "catch",
    "finally", "throw", "new", "this", "class", "extends", "import", "export",
    "from", "as", "async", "await", "yield", "typeof", "instanceof", "in",
    "of", "delete", "void", "with", "debugger",
];

const BUILTINS: &[&str] = &[
    "console", "log", "alert", "document", "window", "setTimeout", "setInterval",
    "fetch", "Promise", "Array", "Object", "String", "Number", "Boolean", "Date",
];

/// Create JavaScript configuration
pub fn javascript_config() -> LanguageConfig {
    LanguageConfig::new(KEYWORDS.iter().copied()).with_builtins(BUILTINS.iter().copied())
}
