//! Dataset adapters.

mod dto;
mod file_dataset_reader;

pub use dto::{
    CriteriaFile, CriterionRecord, ItemRecord, ItemsFile, KeyedCells, ProfileRecord,
    ProfilesFile, ValuesRecord,
};
pub use file_dataset_reader::FileDatasetReader;
