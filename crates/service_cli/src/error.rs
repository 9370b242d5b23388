//! CLI error types

use std::path::PathBuf;

use pricer_models::lattice::LatticeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `lattice` commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] LatticeError),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scenario file: {0}")]
    Scenario(#[from] toml::de::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{failed} of {total} scenarios failed")]
    BatchFailed { failed: usize, total: usize },
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err: CliError = LatticeError::InvalidSteps { steps: 0, max: 10 }.into();
        assert_eq!(
            err.to_string(),
            "Pricing failed: Invalid step count: N = 0 (must be between 1 and 10)"
        );
    }

    #[test]
    fn test_batch_failed_display() {
        let err = CliError::BatchFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 scenarios failed");
    }
}
