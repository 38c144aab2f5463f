//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid enhancement timeout: {0}s (must be between 1 and 120)")]
    InvalidTimeout(u64),

    #[error("Catalog seed path is empty")]
    EmptySeedPath,

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
