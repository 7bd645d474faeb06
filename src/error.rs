//! Error types for codepad

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for codepad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the highlighter itself (config, CLI, rendering).
///
/// Highlighting is total and never produces one of these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for `{key}`: {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
