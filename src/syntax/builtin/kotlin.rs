//! Kotlin language configuration

use crate::syntax::registry::LanguageConfig;

const KEYWORDS: &[&str] = &[
    "fun", "val", "var", "class", "interface", "object", "typealias",
    "if", "else", "when", "for", "while", "do", "try", "catch", "finally",
    "return", "throw", "break", "continue", "this", "super", "is", "in", "!in", "as", "!is",
    "package", "import", "get", "set", "by", "where", "init", "constructor",
    "abstract", "open", "final", "enum", "sealed", "annotation", "data",
    "override", "private", "protected", "public", "internal", "const",
    "operator", "infix", "inline", "noinline", "crossinline", "tailrec",
    "external", "suspend", "expect", "actual", "reified", "lateinit",
    "companion", "inner", "out", "vararg", "dynamic",
];

const TYPES: &[&str] = &[
    "String", "Int", "Long", "Double", "Float", "Boolean", "Char", "Byte", "Short",
    "List", "Set", "Map", "Array", "MutableList", "MutableSet", "MutableMap",
    "Any", "Unit", "Nothing", "null",
];

// No `main` here: it names the entry point being defined, not a library call.
const BUILTINS: &[&str] = &[
    "println", "print", "readLine", "listOf", "setOf", "mapOf",
    "mutableListOf", "mutableSetOf", "mutableMapOf", "arrayOf",
    "with", "apply", "also", "let", "run", "repeat", "require", "check",
    "assert", "error", "TODO", "lazy", "use",
];

/// Create Kotlin configuration
pub fn kotlin_config() -> LanguageConfig {
    LanguageConfig::new(KEYWORDS.iter().copied())
        .with_types(TYPES.iter().copied())
        .with_builtins(BUILTINS.iter().copied())
}
