//! Runtime configuration for the supplygraph tools.
//!
//! Configuration is layered: built-in defaults, then `supplygraph.toml` in
//! the working directory, then `SUPPLYGRAPH_*` environment variables. Nested
//! keys use a double underscore in the environment
//! (`SUPPLYGRAPH_LOGGING__LEVEL=debug`).

use std::path::Path;

use figment::providers::{Data, Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Extraction failure: unreadable file, bad TOML, or a type mismatch.
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    /// A field value is outside its accepted range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level directive handed to the subscriber
    /// (`trace`, `debug`, `info`, `warn`, or `error`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Default bounds for reachability traversals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSettings {
    /// Maximum traversal depth.
    pub max_depth: usize,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self {
            max_depth: 3,
            limit: 100,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Traversal defaults.
    pub traversal: TraversalSettings,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl SupplyConfig {
    /// Loads configuration from `supplygraph.toml` and the environment,
    /// over built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(Toml::file("supplygraph.toml")))
    }

    /// Loads configuration from an explicit TOML file path and the
    /// environment, over built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(Toml::file(path)))
    }

    fn figment(file: Data<Toml>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed("SUPPLYGRAPH_").split("__"))
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level must be one of {LOG_LEVELS:?}, got '{}'",
                self.logging.level
            )));
        }
        if self.traversal.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "traversal.max_depth must be at least 1".to_string(),
            ));
        }
        if self.traversal.limit == 0 {
            return Err(ConfigError::Invalid(
                "traversal.limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
