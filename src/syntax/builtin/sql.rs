//! SQL language configuration

use crate::syntax::registry::LanguageConfig;

const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER",
    "DROP", "TABLE", "VIEW", "INDEX", "JOIN", "LEFT", "RIGHT", "INNER", "OUTER",
    "GROUP BY", "ORDER BY", "HAVING", "UNION", "DISTINCT", "LIKE", "IN", "BETWEEN",
    "AND", "OR", "NOT", "NULL", "AS", "ON", "SET", "VALUES", "INTO",
];

/// Create SQL configuration
///
/// Keywords are matched exactly as written, so lowercase SQL stays plain.
pub fn sql_config() -> LanguageConfig {
    LanguageConfig::new(KEYWORDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use crate::syntax::{CompiledLanguage, LanguageId, TokenType};

    #[test]
    fn test_sql_multi_word_keyword() {
        let lang = CompiledLanguage::for_language(LanguageId::Sql);
        let runs = lang.highlight_line("SELECT name FROM users GROUP BY name");
        let keywords: Vec<_> = runs
            .iter()
            .filter(|r| r.token == Some(TokenType::Keyword))
            .map(|r| r.text)
            .collect();
        assert_eq!(keywords, vec!["SELECT", "FROM", "GROUP BY"]);
    }

    // Multi-word keywords are literal: exactly one space between the words
    #[test]
    fn test_sql_multi_word_keyword_needs_single_space() {
        let lang = CompiledLanguage::for_language(LanguageId::Sql);
        for line in ["GROUP  BY name", "ORDER\tBY name"] {
            let runs = lang.highlight_line(line);
            assert!(runs.iter().all(|r| r.token != Some(TokenType::Keyword)), "{line:?}");
        }
    }

    #[test]
    fn test_sql_lowercase_is_plain() {
        let lang = CompiledLanguage::for_language(LanguageId::Sql);
        assert!(lang.line_tokens("select * from t").is_empty());
    }

    #[test]
    fn test_sql_string_literal() {
        let lang = CompiledLanguage::for_language(LanguageId::Sql);
        let spans = lang.line_tokens("WHERE id = 'a1'");
        assert_eq!(spans.last().map(|s| s.token), Some(TokenType::String));
    }
}
