//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tictactoe_core::{PlayerRegistry, Symbol};
use tracing::{debug, info, instrument};

/// Settings read from `tictactoe.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Starting names for X and O.
    players: PlayerRegistry,

    /// Where tracing output goes while the terminal UI is running.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            players: PlayerRegistry::default(),
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            x = %config.players.name(Symbol::X),
            o = %config.players.name(Symbol::O),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line name overrides.
    pub fn with_names(mut self, x: Option<String>, o: Option<String>) -> Self {
        if let Some(name) = x {
            self.players.rename(Symbol::X, name);
        }
        if let Some(name) = o {
            self.players.rename(Symbol::O, name);
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
