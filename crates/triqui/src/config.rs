//! Configuration for the triqui CLI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use triqui_engine::MoveOracle;

/// Settings loaded from a TOML file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriquiConfig {
    /// Fixed seed for the tie-break RNG. Absent means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Games per self-play batch.
    #[serde(default = "default_self_play_games")]
    self_play_games: u32,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_self_play_games() -> u32 {
    100
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TriquiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            self_play_games: default_self_play_games(),
            log_filter: default_log_filter(),
        }
    }
}

impl TriquiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` when one is given, otherwise returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the seed when `seed` is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds an oracle from the configured seed.
    pub fn oracle(&self) -> MoveOracle {
        match self.seed {
            Some(seed) => MoveOracle::seeded(seed),
            None => MoveOracle::from_entropy(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TriquiConfig::from_toml("").unwrap();
        assert_eq!(config, TriquiConfig::default());
        assert_eq!(*config.self_play_games(), 100);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_seed_override() {
        let config = TriquiConfig::from_toml("seed = 3").unwrap();
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.clone().with_seed(None).seed(), Some(3));
        assert_eq!(*config.with_seed(Some(8)).seed(), Some(8));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TriquiConfig::from_toml("sead = 3").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
