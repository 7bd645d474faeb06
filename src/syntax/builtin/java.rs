//! Java language configuration

use crate::syntax::registry::LanguageConfig;

const KEYWORDS: &[&str] = &[
    "class", "interface", "enum", "public", "private", "protected", "static",
    "final", "abstract", "void", "int", "long", "double", "float", "boolean",
    "char", "byte", "short", "if", "else", "for", "while", "do", "switch",
    "case", "default", "break", "continue", "return", "try", "catch", "finally",
    "throw", "new", "this", "super", "extends", "implements", "import", "package",
    "native", "synchronized", "volatile", "transient", "instanceof", "assert",
];

const TYPES: &[&str] = &["String", "Object", "Integer", "Long", "Double", "Float", "Boolean"];

const BUILTINS: &[&str] = &["System", "out", "println", "main", "Math"];

/// Create Java configuration
pub fn java_config() -> LanguageConfig {
    LanguageConfig::new(KEYWORDS.iter().copied())
        .with_types(TYPES.iter().copied())
        .with_builtins(BUILTINS.iter().copied())
}
