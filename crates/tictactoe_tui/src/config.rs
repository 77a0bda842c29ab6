//! Display configuration for the terminal UI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Settings loaded from the TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Glyph drawn for X's marks.
    #[serde(default = "default_glyph_x")]
    glyph_x: String,

    /// Glyph drawn for O's marks.
    #[serde(default = "default_glyph_o")]
    glyph_o: String,

    /// Background colour of the winning line (any `ratatui` colour name or `#rrggbb`).
    #[serde(default = "default_highlight_color")]
    highlight_color: String,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_glyph_x() -> String {
    "X".to_string()
}

fn default_glyph_o() -> String {
    "O".to_string()
}

fn default_highlight_color() -> String {
    "green".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            glyph_x: default_glyph_x(),
            glyph_o: default_glyph_o(),
            highlight_color: default_highlight_color(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Glyph for the given player.
    pub fn glyph(&self, player: tictactoe_core::Player) -> &str {
        match player {
            tictactoe_core::Player::X => &self.glyph_x,
            tictactoe_core::Player::O => &self.glyph_o,
        }
    }

    /// Parsed highlight colour.
    pub fn highlight(&self) -> Result<Color, ConfigError> {
        Color::from_str(&self.highlight_color).map_err(|_| {
            ConfigError::new(format!(
                "Unknown highlight colour: {:?}",
                self.highlight_color
            ))
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.glyph_x.trim().is_empty() || self.glyph_o.trim().is_empty() {
            return Err(ConfigError::new("Glyphs must not be blank".to_string()));
        }
        if self.glyph_x == self.glyph_o {
            return Err(ConfigError::new(
                "X and O must use different glyphs".to_string(),
            ));
        }
        self.highlight()?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TuiConfig::from_toml("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.highlight().unwrap(), Color::Green);
    }

    #[test]
    fn test_partial_document() {
        let config = TuiConfig::from_toml("glyph_x = \"x\"\nhighlight_color = \"#ff0000\"").unwrap();
        assert_eq!(config.glyph_x(), "x");
        assert_eq!(config.glyph_o(), "O");
        assert_eq!(config.highlight().unwrap(), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_rejects_unknown_colour() {
        let err = TuiConfig::from_toml("highlight_color = \"not-a-colour\"").unwrap_err();
        assert!(err.message.contains("highlight"));
    }

    #[test]
    fn test_rejects_blank_or_duplicate_glyphs() {
        assert!(TuiConfig::from_toml("glyph_o = \"  \"").is_err());
        assert!(TuiConfig::from_toml("glyph_o = \"X\"").is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(TuiConfig::from_toml("board_size = 4").is_err());
    }
}
