//! Play configuration for interactive games.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Player;
use tracing::{debug, info, instrument};

/// Settings for `play`, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark the human plays.
    #[serde(default = "default_human")]
    human: Player,

    /// Whether to print the square numbering before each prompt.
    #[serde(default)]
    show_hints: bool,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            show_hints: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, human: Option<Player>, hints: bool) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self.show_hints |= hints;
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
