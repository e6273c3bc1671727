//! File-based Dataset Reader Adapter
//!
//! Loads criteria, profiles and items from YAML or JSON files on disk.
//! The format of each file is picked from its extension, so the three
//! tables may be mixed freely.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::dto::{CriteriaFile, ItemsFile, ProfilesFile};
use crate::adapters::FileFormat;
use crate::domain::electre::{CriteriaSet, PerformanceTable};
use crate::domain::foundation::EntityKind;
use crate::ports::{DatasetError, DatasetReader};

/// Reads dataset tables from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FileDatasetReader;

impl FileDatasetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read and deserialize one table file
    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()));
        }

        let format = FileFormat::from_path(path)
            .ok_or_else(|| DatasetError::UnsupportedFormat(path.to_path_buf()))?;

        let content = fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        format.parse(&content).map_err(|message| DatasetError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }
}

impl DatasetReader for FileDatasetReader {
    fn read_criteria(&self, path: &Path) -> Result<CriteriaSet, DatasetError> {
        let file: CriteriaFile = self.load(path)?;
        let criteria = file.into_domain()?;

        debug!(path = %path.display(), criteria = criteria.len(), "Loaded criteria");
        Ok(criteria)
    }

    fn read_performance_table(
        &self,
        criteria: &CriteriaSet,
        profiles_path: &Path,
        items_path: &Path,
    ) -> Result<PerformanceTable, DatasetError> {
        let profiles: ProfilesFile = self.load(profiles_path)?;
        let items: ItemsFile = self.load(items_path)?;

        let mut builder = PerformanceTable::builder(criteria);
        for record in profiles.profiles {
            let values = record
                .values
                .into_vector(criteria, EntityKind::Profile, &record.name)?;
            builder = builder.profile(record.name, record.rank, values);
        }
        for record in items.items {
            let values = record
                .values
                .into_vector(criteria, EntityKind::Item, &record.name)?;
            builder = builder.item(record.name, values);
        }
        let table = builder.build()?;

        debug!(
            profiles = table.profile_count(),
            items = table.item_count(),
            "Loaded performance table"
        );
        Ok(table)
    }
}
