//! Terminal settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_marks::{Board, Mark};
use tracing::{debug, info, instrument};

/// How the board and marks are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Symbol for cells marked by the first player.
    #[serde(default = "default_first_symbol")]
    first_symbol: String,

    /// Symbol for cells marked by the second player.
    #[serde(default = "default_second_symbol")]
    second_symbol: String,

    /// Symbol for empty cells.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: String,

    /// Print the board after every accepted move.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_first_symbol() -> String {
    "X".to_string()
}

fn default_second_symbol() -> String {
    "O".to_string()
}

fn default_empty_symbol() -> String {
    ".".to_string()
}

fn default_show_board() -> bool {
    true
}

impl DisplaySettings {
    /// Returns the configured symbol for a mark.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::First => self.first_symbol.as_str(),
            Mark::Second => self.second_symbol.as_str(),
            Mark::None => self.empty_symbol.as_str(),
        }
    }

    /// Draws the board with the configured symbols.
    pub fn render(&self, board: &Board) -> String {
        board.render(&self.first_symbol, &self.second_symbol, &self.empty_symbol)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            first_symbol: default_first_symbol(),
            second_symbol: default_second_symbol(),
            empty_symbol: default_empty_symbol(),
            show_board: default_show_board(),
        }
    }
}

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Board rendering.
    #[serde(default)]
    display: DisplaySettings,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(log_filter = %settings.log_filter, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
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
