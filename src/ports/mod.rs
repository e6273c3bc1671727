//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DatasetReader` - Loads criteria, profiles and items
//! - `ReportWriter` - Persists the assignment report of a run

mod dataset_reader;
mod report_writer;

pub use dataset_reader::{DatasetError, DatasetReader};
pub use report_writer::{ReportError, ReportWriter};
