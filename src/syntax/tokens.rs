//! Token types for syntax highlighting
//!
//! This module defines the semantic token categories the highlighter
//! assigns and their default visual styles.

use super::style::{Color, Style};

/// Semantic token types for syntax highlighting
///
/// Plain text has no token type at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Whole-line comments
    Comment,
    /// Quoted string literals
    String,
    /// Numeric literals
    Number,
    /// Language keywords
    Keyword,
    /// Built-in type names
    Type,
    /// Standard library identifiers
    Builtin,
}

impl TokenType {
    /// Every token type, in highlighting priority order after comments
    pub const ALL: [TokenType; 6] = [
        TokenType::Comment,
        TokenType::String,
        TokenType::Number,
        TokenType::Keyword,
        TokenType::Type,
        TokenType::Builtin,
    ];

    /// Get the default style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::from_argb(0xFF6A9955)),
            TokenType::String => Style::fg(Color::from_argb(0xFFCE9178)),
            TokenType::Number => Style::fg(Color::from_argb(0xFFB5CEA8)),
            TokenType::Keyword => Style::fg(Color::from_argb(0xFF569CD6)),
            TokenType::Type => Style::fg(Color::from_argb(0xFF4EC9B0)),
            TokenType::Builtin => Style::fg(Color::from_argb(0xFFDCDCAA)),
        }
    }

    /// Get the name used for this token type in config files
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Keyword => "keyword",
            TokenType::Type => "type",
            TokenType::Builtin => "builtin",
        }
    }

    /// Parse a token type from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "comment" => Some(TokenType::Comment),
            "string" => Some(TokenType::String),
            "number" => Some(TokenType::Number),
            "keyword" => Some(TokenType::Keyword),
            "type" => Some(TokenType::Type),
            "builtin" => Some(TokenType::Builtin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for token in TokenType::ALL {
            assert!(!token.default_style().is_default(), "{:?}", token);
        }
    }

    #[test]
    fn test_default_styles_distinct() {
        for (i, a) in TokenType::ALL.iter().enumerate() {
            for b in &TokenType::ALL[i + 1..] {
                assert_ne!(a.default_style(), b.default_style());
            }
        }
    }

    #[test]
    fn test_from_name_roundtrip() {
        for token in TokenType::ALL {
            assert_eq!(TokenType::from_name(token.name()), Some(token));
        }
        assert_eq!(TokenType::from_name("Keyword"), Some(TokenType::Keyword));
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("operator"), None);
        assert_eq!(TokenType::from_name(""), None);
    }
}
