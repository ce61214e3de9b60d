//! Configuration types.

use crate::error::ConfigError;
use crate::parsers::ParserConfig;

/// Environment variable overriding the queue source-identifier field.
pub const SOURCE_FIELD_ENV: &str = "PLUMMY_SOURCE_FIELD";

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "PLUMMY_LOG";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Field of a queue message that carries its source identifier.
    pub source_field: String,
    /// `tracing_subscriber::EnvFilter` directive (e.g. "info", "plummy=debug").
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_field: ParserConfig::DEFAULT_SOURCE_FIELD.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Build a config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(field) = lookup(SOURCE_FIELD_ENV) {
            let field = field.trim();
            if field.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: SOURCE_FIELD_ENV.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            config.source_field = field.to_string();
        }

        if let Some(filter) = lookup(LOG_FILTER_ENV)
            && !filter.trim().is_empty()
        {
            config.log_filter = filter.trim().to_string();
        }

        Ok(config)
    }

    /// Parser settings derived from this config.
    pub fn parser(&self) -> ParserConfig {
        ParserConfig {
            source_field: self.source_field.clone(),
        }
    }
}
