//! Language registry
//!
//! Maps every `LanguageId` to its lexical configuration. The table is
//! built once on first use and is read-only afterwards.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use super::builtin;
use super::language::LanguageId;

/// Default single-line comment marker
pub const DEFAULT_LINE_COMMENT: &str = "//";
/// Default block comment markers
pub const DEFAULT_BLOCK_COMMENT: (&str, &str) = ("/*", "*/");
/// Default string delimiters
pub const DEFAULT_STRING_DELIMITERS: [char; 2] = ['"', '\''];
/// Default numeric literal pattern
///
/// Digits are ASCII only; `\b` stays Unicode-aware.
pub const DEFAULT_NUMBER_PATTERN: &str = r"\b[0-9]+\.?[0-9]*\b";

/// Lexical rules for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Reserved words
    pub keywords: BTreeSet<&'static str>,
    /// Built-in type names
    pub types: BTreeSet<&'static str>,
    /// Standard library identifiers
    pub builtins: BTreeSet<&'static str>,
    /// Marker that turns a whole line into a comment (empty disables it)
    pub single_line_comment: &'static str,
    /// Block comment opener; declared but not honored by the line tokenizer
    pub multi_line_comment_start: &'static str,
    /// Block comment closer; declared but not honored by the line tokenizer
    pub multi_line_comment_end: &'static str,
    /// Characters that open and close a string literal
    pub string_delimiters: BTreeSet<char>,
    /// Regex source for numeric literals
    pub number_pattern: &'static str,
}

impl LanguageConfig {
    /// Create a configuration with the given keywords and default markers
    pub fn new<I>(keywords: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            keywords: keywords.into_iter().collect(),
            types: BTreeSet::new(),
            builtins: BTreeSet::new(),
            single_line_comment: DEFAULT_LINE_COMMENT,
            multi_line_comment_start: DEFAULT_BLOCK_COMMENT.0,
            multi_line_comment_end: DEFAULT_BLOCK_COMMENT.1,
            string_delimiters: DEFAULT_STRING_DELIMITERS.into_iter().collect(),
            number_pattern: DEFAULT_NUMBER_PATTERN,
        }
    }

    /// Configuration with no keywords, types or builtins
    pub fn plain() -> Self {
        Self::new(std::iter::empty())
    }

    /// Builder: set type names
    pub fn with_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.types = types.into_iter().collect();
        self
    }

    /// Builder: set builtin identifiers
    pub fn with_builtins<I>(mut self, builtins: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        self.builtins = builtins.into_iter().collect();
        self
    }

    /// Builder: set the single-line comment marker
    pub fn with_line_comment(mut self, marker: &'static str) -> Self {
        self.single_line_comment = marker;
        self
    }

    /// Builder: set the block comment markers
    pub fn with_block_comment(mut self, start: &'static str, end: &'static str) -> Self {
        self.multi_line_comment_start = start;
        self.multi_line_comment_end = end;
        self
    }

    /// Builder: set string delimiters
    pub fn with_string_delimiters<I>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.string_delimiters = delimiters.into_iter().collect();
        self
    }

    /// Builder: set the numeric literal pattern
    pub fn with_number_pattern(mut self, pattern: &'static str) -> Self {
        self.number_pattern = pattern;
        self
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::plain()
    }
}

static REGISTRY: LazyLock<HashMap<LanguageId, LanguageConfig>> = LazyLock::new(|| {
    LanguageId::ALL
        .into_iter()
        .map(|id| (id, builtin::language_config(id)))
        .collect()
});

static PLAIN: LazyLock<LanguageConfig> = LazyLock::new(LanguageConfig::plain);

/// Get the configuration for a language
pub fn config_for(id: LanguageId) -> &'static LanguageConfig {
    REGISTRY.get(&id).unwrap_or_else(|| &*PLAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_registered() {
        for id in LanguageId::ALL {
            let config = config_for(id);
            assert!(!config.string_delimiters.is_empty(), "{}", id);
            assert!(!config.number_pattern.is_empty(), "{}", id);
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let a = config_for(LanguageId::Kotlin) as *const LanguageConfig;
        let b = config_for(LanguageId::Kotlin) as *const LanguageConfig;
        assert_eq!(a, b);
    }

    #[test]
    fn test_defaults() {
        let config = LanguageConfig::plain();
        assert!(config.keywords.is_empty());
        assert!(config.types.is_empty());
        assert!(config.builtins.is_empty());
        assert_eq!(config.single_line_comment, "//");
        assert_eq!(config.multi_line_comment_start, "/*");
        assert_eq!(config.multi_line_comment_end, "*/");
        assert_eq!(config.number_pattern, DEFAULT_NUMBER_PATTERN);
    }

    #[test]
    fn test_keywords_deduplicated() {
        let config = LanguageConfig::new(["in", "out", "in"]);
        assert_eq!(config.keywords.len(), 2);
    }

    #[test]
    fn test_comment_markers() {
        assert_eq!(config_for(LanguageId::Python).single_line_comment, "#");
        assert_eq!(config_for(LanguageId::Xml).single_line_comment, "<!--");
        assert_eq!(config_for(LanguageId::Xml).multi_line_comment_end, "-->");
        assert_eq!(config_for(LanguageId::Java).single_line_comment, "//");
    }

    #[test]
    fn test_cpp_includes_c_keywords() {
        let c = config_for(LanguageId::C);
        let cpp = config_for(LanguageId::Cpp);
        assert!(c.keywords.is_subset(&cpp.keywords));
        assert!(cpp.keywords.contains("template"));
        assert!(!c.keywords.contains("template"));
    }
}
