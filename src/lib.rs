//! codepad - line-based syntax highlighting for a lightweight code editor
//!
//! ```
//! use codepad::syntax::{highlight, LanguageId, TokenType};
//!
//! let runs = highlight("val x = 42", LanguageId::Kotlin);
//! assert_eq!(runs[0].text, "val");
//! assert_eq!(runs[0].token, Some(TokenType::Keyword));
//! assert_eq!(runs.iter().map(|r| r.text).collect::<String>(), "val x = 42");
//! ```

pub mod config;
pub mod error;
pub mod syntax;
pub mod terminal;

pub use error::{Error, Result};
