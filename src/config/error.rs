//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Majority threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("Invalid category list: {0}")]
    InvalidCategories(String),

    #[error("Unknown log format '{0}' (expected pretty or json)")]
    InvalidLogFormat(String),
}
