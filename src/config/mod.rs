//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ELECTRE_TRI` prefix and nested values use double underscores as separators.
//! Command-line flags override loaded values in `main`.
//!
//! # Example
//!
//! ```no_run
//! use electre_tri::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sorting {}", config.data.items_file.display());
//! ```

mod data;
mod error;
mod logging;
mod sorting;

pub use data::{DataConfig, DEFAULT_OUTPUT_NAME};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use sorting::SortingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Majority threshold and category labels
    #[serde(default)]
    pub sorting: SortingConfig,

    /// Input and output file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `ELECTRE_TRI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ELECTRE_TRI__SORTING__THRESHOLD=0.6` -> `sorting.threshold = 0.6`
    /// - `ELECTRE_TRI__DATA__ITEMS_FILE=...` -> `data.items_file = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ELECTRE_TRI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sorting.validate()?;
        self.data.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
