//! Game configuration for the terminal controller.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_cube::RuleSet;
use tracing::{debug, info, instrument};

/// Settings loaded from a TOML file, overridable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Terminal conditions applied to each session.
    #[serde(default)]
    #[getter(copy)]
    rules: RuleSet,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the world-space offset of each placed piece.
    #[serde(default = "default_show_offsets")]
    #[getter(copy)]
    show_offsets: bool,
}

fn default_log_filter() -> String {
    "info,strictly_cube=debug".to_string()
}

fn default_show_offsets() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            log_filter: default_log_filter(),
            show_offsets: default_show_offsets(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(rules = %config.rules, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if given and present, otherwise returns defaults.
    ///
    /// A path that does not exist is logged and treated like no path.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces the rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
