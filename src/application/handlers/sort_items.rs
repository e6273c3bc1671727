//! SortItemsHandler - Command handler for a complete sorting run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::domain::electre::{
    CategoryScale, GlobalConcordanceTable, MajoritySorter, PartialConcordanceTable, SortingReport,
};
use crate::domain::foundation::{ErrorCode, MajorityThreshold, SortingError};
use crate::ports::{DatasetError, DatasetReader, ReportError, ReportWriter};

/// Command to sort every item of a dataset into the category scale.
#[derive(Debug, Clone)]
pub struct SortItemsCommand {
    pub profiles_path: PathBuf,
    pub criteria_path: PathBuf,
    pub items_path: PathBuf,
    pub output_path: PathBuf,
    pub threshold: MajorityThreshold,
    pub categories: CategoryScale,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct SortItemsResult {
    pub report: SortingReport,
    pub output_path: PathBuf,
}

/// Errors from a sorting run.
#[derive(Debug, thiserror::Error)]
pub enum SortItemsError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Sorting(#[from] SortingError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl SortItemsError {
    /// Returns the domain error code, if the run failed on a domain rule.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            SortItemsError::Sorting(e) | SortItemsError::Dataset(DatasetError::Invalid(e)) => {
                Some(e.code())
            }
            _ => None,
        }
    }
}

/// Handler for sorting runs.
pub struct SortItemsHandler {
    reader: Arc<dyn DatasetReader>,
    writer: Arc<dyn ReportWriter>,
}

impl SortItemsHandler {
    pub fn new(reader: Arc<dyn DatasetReader>, writer: Arc<dyn ReportWriter>) -> Self {
        Self { reader, writer }
    }

    pub fn handle(&self, cmd: SortItemsCommand) -> Result<SortItemsResult, SortItemsError> {
        // 1. Fail fast on missing inputs
        for path in [&cmd.criteria_path, &cmd.profiles_path, &cmd.items_path] {
            ensure_exists(path)?;
        }

        // 2. Load tables
        let criteria = self.reader.read_criteria(&cmd.criteria_path)?;
        let table =
            self.reader
                .read_performance_table(&criteria, &cmd.profiles_path, &cmd.items_path)?;

        info!(
            criteria = criteria.len(),
            profiles = table.profile_count(),
            items = table.item_count(),
            categories = cmd.categories.len(),
            "Dataset loaded"
        );

        // 3. Concordance, once the table fits the scale
        MajoritySorter::check_profile_count(&cmd.categories, &table)?;
        let partial = PartialConcordanceTable::compute(&criteria, &table)?;
        let global = GlobalConcordanceTable::from_criteria(&criteria, &partial)?;

        // 4. Assignment
        let pessimistic = MajoritySorter::pessimistic(&cmd.categories, &table, &global, cmd.threshold)?;
        let optimistic = MajoritySorter::optimistic(&cmd.categories, &table, &global, cmd.threshold)?;

        // 5. Report
        let report = SortingReport::new(cmd.threshold, &cmd.categories, &pessimistic, &optimistic);
        self.writer.write(&cmd.output_path, &report)?;

        info!(
            run_id = %report.run_id,
            output = %cmd.output_path.display(),
            divergent = report.summary.divergent_items.len(),
            "Sorting complete"
        );

        Ok(SortItemsResult {
            report,
            output_path: cmd.output_path,
        })
    }
}

fn ensure_exists(path: &Path) -> Result<(), SortItemsError> {
    if path.exists() {
        Ok(())
    } else {
        Err(SortItemsError::InputNotFound(path.to_path_buf()))
    }
}
