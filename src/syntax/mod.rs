//! Syntax highlighting
//!
//! This module provides:
//! - The closed set of supported languages and their lexical rules
//! - The line-based highlighter producing styled runs
//! - Themes mapping token categories to display styles

mod builtin;
mod highlighter;
mod language;
mod registry;
mod rules;
mod style;
mod theme;
mod tokens;

pub use highlighter::{highlight, highlight_line, highlight_lines, CompiledLanguage, StyledRun};
pub use language::LanguageId;
pub use registry::{config_for, LanguageConfig, DEFAULT_NUMBER_PATTERN};
pub use style::{Color, Span, Style};
pub use theme::Theme;
pub use tokens::TokenType;
