//! Report adapters.

mod file_report_writer;

pub use file_report_writer::FileReportWriter;
