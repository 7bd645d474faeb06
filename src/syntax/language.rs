//! Supported languages
//!
//! The set of languages is closed; `LanguageId` is the key into the
//! registry and the compiled rule cache.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    Kotlin,
    Java,
    JavaScript,
    Python,
    Cpp,
    C,
    Xml,
    Json,
    Html,
    Css,
    Sql,
}

impl LanguageId {
    /// Every supported language
    pub const ALL: [LanguageId; 11] = [
        LanguageId::Kotlin,
        LanguageId::Java,
        LanguageId::JavaScript,
        LanguageId::Python,
        LanguageId::Cpp,
        LanguageId::C,
        LanguageId::Xml,
        LanguageId::Json,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Sql,
    ];

    /// Human-readable name (e.g., "JavaScript", "C++")
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Kotlin => "Kotlin",
            LanguageId::Java => "Java",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Python => "Python",
            LanguageId::Cpp => "C++",
            LanguageId::C => "C",
            LanguageId::Xml => "XML",
            LanguageId::Json => "JSON",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Sql => "SQL",
        }
    }

    /// Canonical lowercase name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Kotlin => "kotlin",
            LanguageId::Java => "java",
            LanguageId::JavaScript => "javascript",
            LanguageId::Python => "python",
            LanguageId::Cpp => "cpp",
            LanguageId::C => "c",
            LanguageId::Xml => "xml",
            LanguageId::Json => "json",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Sql => "sql",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Kotlin => &["kt"],
            LanguageId::JavaScript => &["js"],
            LanguageId::Python => &["py"],
            LanguageId::Cpp => &["c++", "cxx"],
            _ => &[],
        }
    }

    /// File extensions associated with this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Kotlin => &["kt", "kts"],
            LanguageId::Java => &["java"],
            LanguageId::JavaScript => &["js", "mjs", "cjs"],
            LanguageId::Python => &["py", "pyw", "pyi"],
            LanguageId::Cpp => &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
            LanguageId::C => &["c", "h"],
            LanguageId::Xml => &["xml", "xsd", "svg"],
            LanguageId::Json => &["json"],
            LanguageId::Html => &["html", "htm"],
            LanguageId::Css => &["css"],
            LanguageId::Sql => &["sql"],
        }
    }

    /// Look up a language by name or alias (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.name() == name || id.aliases().contains(&name.as_str()))
    }

    /// Detect language from a file name's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LanguageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(LanguageId::from_path(Path::new("Main.kt")), Some(LanguageId::Kotlin));
        assert_eq!(LanguageId::from_path(Path::new("App.java")), Some(LanguageId::Java));
        assert_eq!(LanguageId::from_path(Path::new("script.py")), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_path(Path::new("lib.HPP")), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_path(Path::new("main.c")), Some(LanguageId::C));
        assert_eq!(LanguageId::from_path(Path::new("schema.sql")), Some(LanguageId::Sql));
        assert_eq!(LanguageId::from_path(Path::new("Makefile")), None);
        assert_eq!(LanguageId::from_path(Path::new("notes.txt")), None);
    }

    #[test]
    fn test_extensions_unique() {
        let mut seen = std::collections::HashSet::new();
        for id in LanguageId::ALL {
            for ext in id.extensions() {
                assert!(seen.insert(*ext), "duplicate extension {}", ext);
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(LanguageId::from_name("Kotlin"), Some(LanguageId::Kotlin));
        assert_eq!(LanguageId::from_name("js"), Some(LanguageId::JavaScript));
        assert_eq!(LanguageId::from_name("C++"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_name(" SQL "), Some(LanguageId::Sql));
        assert_eq!(LanguageId::from_name("cobol"), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for id in LanguageId::ALL {
            assert_eq!(id.name().parse::<LanguageId>().unwrap(), id);
        }
    }

    #[test]
    fn test_from_str_error() {
        let err = "brainfuck".parse::<LanguageId>().unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(ref name) if name == "brainfuck"));
    }
}
