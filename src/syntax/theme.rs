//! Token-to-style mapping

use std::collections::HashMap;

use super::style::Style;
use super::tokens::TokenType;

/// Styles used to paint each token category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: HashMap<TokenType, Style>,
}

impl Theme {
    /// Style for a token type, falling back to its built-in default
    pub fn style_for(&self, token: TokenType) -> Style {
        self.styles
            .get(&token)
            .copied()
            .unwrap_or_else(|| token.default_style())
    }

    /// Override the style for a token type
    pub fn set(&mut self, token: TokenType, style: Style) {
        self.styles.insert(token, style);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: TokenType::ALL
                .into_iter()
                .map(|token| (token, token.default_style()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::Color;

    #[test]
    fn test_default_theme_matches_token_defaults() {
        let theme = Theme::default();
        for token in TokenType::ALL {
            assert_eq!(theme.style_for(token), token.default_style());
        }
    }

    #[test]
    fn test_override() {
        let mut theme = Theme::default();
        let style = Style::fg(Color::rgb(255, 0, 0)).with_bold();
        theme.set(TokenType::Keyword, style);
        assert_eq!(theme.style_for(TokenType::Keyword), style);
        assert_eq!(theme.style_for(TokenType::Number), TokenType::Number.default_style());
    }
}
