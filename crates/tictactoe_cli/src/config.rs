//! Interface settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the board is drawn after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStyle {
    /// One bracketed row per line: `['X', ' ', 'O']`.
    #[default]
    List,
    /// Pipe-separated rows with `-+-+-` rules between them.
    Grid,
}

/// Settings for the text interface.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Print the instructions paragraph before the game starts.
    #[serde(default = "default_show_instructions")]
    show_instructions: bool,

    /// How to render the board.
    #[serde(default)]
    board_style: BoardStyle,

    /// Character between row and column in a move, as in `1,2`.
    #[serde(default = "default_separator")]
    separator: char,
}

fn default_show_instructions() -> bool {
    true
}

fn default_separator() -> char {
    ','
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_instructions: default_show_instructions(),
            board_style: BoardStyle::default(),
            separator: default_separator(),
        }
    }
}

impl UiConfig {
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

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.separator.is_ascii_digit() || config.separator == '-' {
            return Err(ConfigError::new(format!(
                "Separator {:?} would be ambiguous with the coordinates",
                config.separator
            )));
        }

        Ok(config)
    }

    /// Turns the instructions paragraph off.
    pub fn hide_instructions(mut self) -> Self {
        self.show_instructions = false;
        self
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
