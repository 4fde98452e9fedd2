//! Driver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for the console driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark the human plays in `play` mode.
    #[serde(default = "default_human")]
    human: Player,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print every candidate's value before each engine move.
    #[serde(default)]
    show_analysis: bool,
}

fn default_human() -> Player {
    Player::X
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            log_filter: default_log_filter(),
            show_analysis: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
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

    /// Loads `path` if given, else [`DEFAULT_CONFIG_PATH`] if it exists, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the human's mark when a command-line flag was given.
    pub fn with_human(mut self, human: Option<Player>) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
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
