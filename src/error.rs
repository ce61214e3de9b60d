//! Error types for plummy.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Event error: {0}")]
    Event(#[from] EventError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while a data item travels through a handler chain.
///
/// Handlers never construct or catch these; they come from processors and
/// are passed back to the caller untouched.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Processor {name} failed: {reason}")]
    ProcessorFailed { name: String, reason: String },

    #[error("Item rejected: {0}")]
    Rejected(String),
}

impl ChainError {
    /// Shorthand for a processor failure.
    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProcessorFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors loading a raw event from disk or stdin.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Failed to read event from {source_name}: {reason}")]
    Read { source_name: String, reason: String },

    #[error("Event is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for plummy.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_failure_message_names_step() {
        let err = ChainError::failed("enrich", "missing customer id");
        assert_eq!(
            err.to_string(),
            "Processor enrich failed: missing customer id"
        );
    }

    #[test]
    fn chain_error_converts_into_top_level() {
        let err: Error = ChainError::Rejected("empty body".into()).into();
        assert!(matches!(err, Error::Chain(ChainError::Rejected(_))));
        assert_eq!(err.to_string(), "Chain error: Item rejected: empty body");
    }
}
