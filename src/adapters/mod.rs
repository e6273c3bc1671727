//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `dataset` - Reads criteria, profiles and items from YAML/JSON files
//! - `report` - Writes sorting reports to YAML/JSON files

pub mod dataset;
pub mod report;

mod file_format;

pub use dataset::FileDatasetReader;
pub use file_format::FileFormat;
pub use report::FileReportWriter;
