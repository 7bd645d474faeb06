//! Pattern rules for syntax highlighting
//!
//! A rule is one compiled regex plus the token type it assigns. Rules
//! only count when they match exactly at the scan cursor.

use std::collections::BTreeSet;

use regex::Regex;
use tracing::warn;

use super::tokens::TokenType;

/// A single-line pattern rule
pub struct PatternRule {
    /// Name for debugging
    pub name: &'static str,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token type to assign to matches
    pub token_type: TokenType,
}

impl PatternRule {
    /// Create a new pattern rule, or `None` if the pattern does not compile
    pub fn new(name: &'static str, pattern: &str, token_type: TokenType) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self {
                name,
                pattern: regex,
                token_type,
            }),
            Err(err) => {
                warn!(rule = name, %err, "rejected highlight pattern");
                None
            }
        }
    }

    /// Rule matching any of `words` as a whole word
    ///
    /// Returns `None` for an empty set: an empty alternation would match
    /// the empty string at every word boundary.
    pub fn word_set<'a, I>(name: &'static str, words: I, token_type: TokenType) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut words: Vec<&str> = words.into_iter().filter(|w| !w.is_empty()).collect();
        if words.is_empty() {
            return None;
        }
        // Longest first keeps the alternation independent of input order
        words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        words.dedup();

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(name, &format!(r"\b(?:{})\b", alternation), token_type)
    }

    /// Rule matching a same-line literal that opens and closes with any of
    /// `delimiters` (non-greedy)
    pub fn delimited(name: &'static str, delimiters: &BTreeSet<char>, token_type: TokenType) -> Option<Self> {
        if delimiters.is_empty() {
            return None;
        }
        let class: String = delimiters
            .iter()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        Self::new(name, &format!("[{}].*?[{}]", class, class), token_type)
    }

    /// Find the leftmost match starting at or after `start`
    ///
    /// Searching the full line (rather than a slice) keeps word boundaries
    /// aware of the character before `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }

    /// Match anchored at `pos`: returns the end offset if a non-empty match
    /// starts exactly at `pos`
    #[cfg(test)]
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        self.find_at(text, pos)
            .filter(|&(start, end)| start == pos && end > pos)
            .map(|(_, end)| end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_at() {
        let rule = PatternRule::new("number", r"\d+", TokenType::Number).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 8), None);
        assert_eq!(rule.find_at("abc", 3), None);
    }

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", TokenType::Number).unwrap();
        assert_eq!(rule.match_at("abc 123 def", 4), Some(7));
        assert_eq!(rule.match_at("abc 123 def", 5), Some(7));
        assert_eq!(rule.match_at("abc 123 def", 0), None);
        assert_eq!(rule.match_at("abc", 3), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternRule::new("broken", r"(unclosed", TokenType::Number).is_none());
    }

    #[test]
    fn test_word_boundary_sees_previous_char() {
        let rule = PatternRule::new("number", r"\b\d+\b", TokenType::Number).unwrap();
        assert_eq!(rule.match_at("abc123", 3), None);
        assert_eq!(rule.match_at("abc 123", 4), Some(7));
    }

    #[test]
    fn test_word_set() {
        let rule = PatternRule::word_set("keyword", ["in", "inline", "is"], TokenType::Keyword).unwrap();
        assert_eq!(rule.match_at("inline fun", 0), Some(6));
        assert_eq!(rule.match_at("in x", 0), Some(2));
        assert_eq!(rule.match_at("inside", 0), None);
        assert_eq!(rule.match_at("x.is", 2), Some(4));
    }

    #[test]
    fn test_word_set_escapes_metacharacters() {
        let rule = PatternRule::word_set("keyword", ["a.b"], TokenType::Keyword).unwrap();
        assert_eq!(rule.match_at("a.b", 0), Some(3));
        assert_eq!(rule.match_at("axb", 0), None);
    }

    #[test]
    fn test_word_set_empty() {
        let empty: [&str; 0] = [];
        assert!(PatternRule::word_set("keyword", empty, TokenType::Keyword).is_none());
        assert!(PatternRule::word_set("keyword", [""], TokenType::Keyword).is_none());
    }

    #[test]
    fn test_delimited() {
        let delimiters: BTreeSet<char> = ['"', '\''].into_iter().collect();
        let rule = PatternRule::delimited("string", &delimiters, TokenType::String).unwrap();
        assert_eq!(rule.match_at(r#"x = "a" + "b""#, 4), Some(7));
        assert_eq!(rule.match_at("'it'", 0), Some(4));
        assert_eq!(rule.match_at("\"unterminated", 0), None);
        assert!(PatternRule::delimited("string", &BTreeSet::new(), TokenType::String).is_none());
    }

    #[test]
    fn test_match_never_empty() {
        let rule = PatternRule::new("optional", r"\d*", TokenType::Number).unwrap();
        assert_eq!(rule.match_at("abc", 0), None);
        assert_eq!(rule.match_at("12c", 0), Some(2));
    }
}
