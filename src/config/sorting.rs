//! Sorting configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::electre::CategoryScale;
use crate::domain::foundation::MajorityThreshold;

/// Sorting parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SortingConfig {
    /// Majority threshold λ
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Category labels, lowest first (comma-separated)
    #[serde(default = "default_categories")]
    pub categories: String,
}

impl SortingConfig {
    /// Get the threshold as a validated value object
    pub fn majority_threshold(&self) -> Result<MajorityThreshold, ValidationError> {
        MajorityThreshold::try_new(self.threshold)
            .map_err(|_| ValidationError::InvalidThreshold(self.threshold))
    }

    /// Get categories as a validated scale
    pub fn category_scale(&self) -> Result<CategoryScale, ValidationError> {
        CategoryScale::parse_list(&self.categories)
            .map_err(|e| ValidationError::InvalidCategories(e.to_string()))
    }

    /// Validate sorting configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.majority_threshold()?;
        self.category_scale()?;
        Ok(())
    }
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            categories: default_categories(),
        }
    }
}

fn default_threshold() -> f64 {
    0.2
}

fn default_categories() -> String {
    "E,D,C,B,A".to_string()
}
