//! Dataset Reader Port - Interface for loading criteria, profiles and items.
//!
//! Implementations turn external tables into validated domain objects.
//! Validation failures surface as [`DatasetError::Invalid`] carrying the
//! domain error unchanged.

use std::path::{Path, PathBuf};

use crate::domain::electre::{CriteriaSet, PerformanceTable};
use crate::domain::foundation::SortingError;

/// Errors that can occur while loading a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Unsupported file format for {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Invalid(#[from] SortingError),
}

/// Port for loading the tables of a sorting problem
pub trait DatasetReader: Send + Sync {
    /// Load the criteria table
    ///
    /// # Errors
    /// Returns `DatasetError` if the file cannot be read or parsed, or if the
    /// criteria are invalid (unknown direction, duplicate name, bad weight)
    fn read_criteria(&self, path: &Path) -> Result<CriteriaSet, DatasetError>;

    /// Load profiles and items evaluated on `criteria`
    ///
    /// # Errors
    /// Returns `DatasetError` if either file cannot be read or parsed, or if
    /// the resulting performance table is invalid
    fn read_performance_table(
        &self,
        criteria: &CriteriaSet,
        profiles_path: &Path,
        items_path: &Path,
    ) -> Result<PerformanceTable, DatasetError>;
}
