//! C and C++ language configurations

use crate::syntax::registry::LanguageConfig;

const C_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default",
    "break", "continue", "return", "goto", "sizeof", "typedef",
    "struct", "union", "enum", "void", "char", "short", "int", "long",
    "float", "double", "signed", "unsigned", "const", "volatile",
    "static", "extern", "register", "auto", "inline", "restrict",
];

const CPP_KEYWORDS: &[&str] = &[
    "class", "struct", "namespace", "template", "typename", "using",
    "public", "private", "protected", "virtual", "override", "final",
    "const", "static", "extern", "mutable", "volatile", "register",
    "auto", "decltype", "sizeof", "alignof", "typeid", "dynamic_cast",
    "static_cast", "reinterpret_cast", "const_cast", "new", "delete",
    "this", "operator", "friend", "inline", "explicit", "noexcept",
];

/// Create C configuration
pub fn c_config() -> LanguageConfig {
    LanguageConfig::new(C_KEYWORDS.iter().copied())
}

/// Create C++ configuration (C keywords included)
pub fn cpp_config() -> LanguageConfig {
    LanguageConfig::new(CPP_KEYWORDS.iter().chain(C_KEYWORDS).copied())
}
