//! Report Writer Port - Interface for persisting sorting results.

use std::path::{Path, PathBuf};

use crate::domain::electre::SortingReport;

/// Errors that can occur while writing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Unsupported file format for {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to serialize report: {0}")]
    Serialization(String),
}

/// Port for writing the report of a completed run
pub trait ReportWriter: Send + Sync {
    /// Write `report` to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns `ReportError` if serialization or the write fails
    fn write(&self, path: &Path, report: &SortingReport) -> Result<(), ReportError>;
}
