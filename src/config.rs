//! Configuration file support
//!
//! Loads settings from ~/.codepad.toml (or %USERPROFILE%\.codepad.toml on Windows)
//!
//! Example:
//! ```toml
//! [editor]
//! line-numbers = true
//! color = true
//! default-language = "kotlin"
//!
//! [colors]
//! keyword = "#569CD6"
//! comment = { color = "#6A9955", italic = true }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::syntax::{Color, LanguageId, Style, Theme, TokenType};

const CONFIG_FILE: &str = ".codepad.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether to prefix lines with their number
    pub show_line_numbers: bool,
    /// Whether to emit colors at all
    pub color: bool,
    /// Language used when none is given and none can be detected
    pub default_language: Option<LanguageId>,
    /// Token styles
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            color: true,
            default_language: None,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; a broken one is reported and
    /// ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let table = Self::parse(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Config::default();
        config.apply(&table)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config file contents into a TOML table
    fn parse(contents: &str) -> std::result::Result<Table, toml::de::Error> {
        contents.parse::<Table>()
    }

    /// Apply settings from a parsed config
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(editor) = table.get("editor") {
            let editor = as_table("editor", editor)?;

            if let Some(value) = editor.get("line-numbers") {
                self.show_line_numbers = as_bool("editor.line-numbers", value)?;
            }

            if let Some(value) = editor.get("color") {
                self.color = as_bool("editor.color", value)?;
            }

            if let Some(value) = editor.get("default-language") {
                let name = as_str("editor.default-language", value)?;
                self.default_language = Some(name.parse()?);
            }
        }

        if let Some(colors) = table.get("colors") {
            for (name, value) in as_table("colors", colors)? {
                let key = format!("colors.{}", name);
                let token = TokenType::from_name(name).ok_or_else(|| Error::InvalidConfig {
                    key: key.clone(),
                    reason: "unknown token type".to_string(),
                })?;
                self.theme.set(token, parse_style(&key, value)?);
            }
        }

        Ok(())
    }
}

/// Parse a style given either as `"#RRGGBB"` or as
/// `{ color = "#RRGGBB", bold = true, italic = false }`
fn parse_style(key: &str, value: &Value) -> Result<Style> {
    match value {
        Value::String(hex) => Ok(Style::fg(Color::parse_hex(hex)?)),
        Value::Table(table) => {
            let mut style = Style::default();
            if let Some(color) = table.get("color") {
                style = style.with_fg(Color::parse_hex(as_str(key, color)?)?);
            }
            if let Some(bold) = table.get("bold") {
                style.bold = as_bool(key, bold)?;
            }
            if let Some(italic) = table.get("italic") {
                style.italic = as_bool(key, italic)?;
            }
            Ok(style)
        }
        other => Err(invalid(key, "a color string or table", other)),
    }
}

fn as_table<'a>(key: &str, value: &'a Value) -> Result<&'a Table> {
    value.as_table().ok_or_else(|| invalid(key, "a table", value))
}

fn as_bool(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| invalid(key, "a boolean", value))
}

fn as_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| invalid(key, "a string", value))
}

fn invalid(key: &str, expected: &str, found: &Value) -> Error {
    Error::InvalidConfig {
        key: key.to_string(),
        reason: format!("expected {}, found {}", expected, found.type_str()),
    }
}
