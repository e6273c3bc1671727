//! File-based Report Writer Adapter
//!
//! Writes the sorting report as YAML or JSON, depending on the extension
//! of the target path. Missing parent directories are created.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::adapters::FileFormat;
use crate::domain::electre::SortingReport;
use crate::ports::{ReportError, ReportWriter};

/// Writes reports to the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FileReportWriter;

impl FileReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Ensure the parent directory of `path` exists
    fn ensure_parent(&self, path: &Path) -> Result<(), ReportError> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|e| ReportError::Io {
                    path: dir.to_path_buf(),
                    message: e.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl ReportWriter for FileReportWriter {
    fn write(&self, path: &Path, report: &SortingReport) -> Result<(), ReportError> {
        let format = FileFormat::from_path(path)
            .ok_or_else(|| ReportError::UnsupportedFormat(path.to_path_buf()))?;

        let content = format.render(report).map_err(ReportError::Serialization)?;

        self.ensure_parent(path)?;
        fs::write(path, content).map_err(|e| ReportError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), run_id = %report.run_id, "Wrote sorting report");
        Ok(())
    }
}
