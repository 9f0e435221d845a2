//! CLI error types.

use thiserror::Error;
use variate_core::SamplerError;

use crate::config::ConfigError;

/// Errors surfaced by the `variate` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parameter validation or sampling failure in the core library.
    #[error("Sampling failed: {0}")]
    Sampler(#[from] SamplerError),

    /// Configuration file or environment could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A command-line argument was rejected before sampling.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_error_converts() {
        let err: CliError = SamplerError::invalid("lambda", "must be positive").into();
        assert!(matches!(err, CliError::Sampler(_)));
        assert!(err.to_string().contains("lambda"));
    }

    #[test]
    fn test_display_messages() {
        let err = CliError::InvalidArgument("num".to_string());
        assert_eq!(err.to_string(), "Invalid argument: num");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
