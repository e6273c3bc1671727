//! Data file configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Default report file name, written next to the items file
pub const DEFAULT_OUTPUT_NAME: &str = "output.yaml";

/// Locations of the input tables and the report
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_profiles_file")]
    pub profiles_file: PathBuf,

    #[serde(default = "default_criteria_file")]
    pub criteria_file: PathBuf,

    #[serde(default = "default_items_file")]
    pub items_file: PathBuf,

    /// Report path; defaults to `output.yaml` beside the items file
    pub output_file: Option<PathBuf>,
}

impl DataConfig {
    /// Get the report path, falling back to the items file's directory
    pub fn resolved_output(&self) -> PathBuf {
        self.output_file.clone().unwrap_or_else(|| {
            self.items_file
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_OUTPUT_NAME)
        })
    }

    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profiles_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.profiles_file"));
        }
        if self.criteria_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.criteria_file"));
        }
        if self.items_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.items_file"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            profiles_file: default_profiles_file(),
            criteria_file: default_criteria_file(),
            items_file: default_items_file(),
            output_file: None,
        }
    }
}

fn default_profiles_file() -> PathBuf {
    PathBuf::from("data/profiles.yaml")
}

fn default_criteria_file() -> PathBuf {
    PathBuf::from("data/criteria.yaml")
}

fn default_items_file() -> PathBuf {
    PathBuf::from("data/items.yaml")
}
