//! ELECTRE TRI Module - Pure domain services for multicriteria sorting.
//!
//! Items evaluated on weighted criteria are compared against ordered
//! boundary profiles and assigned to ordered categories.
//!
//! # Components
//!
//! - `CriteriaSet` - Ordered criteria with direction and weight
//! - `PerformanceTable` - Arena of items and ranked profiles with name lookup
//! - `CategoryScale` - Ordered category labels, lowest first
//! - `PartialConcordanceTable` - Binary per-criterion concordance, both directions
//! - `GlobalConcordanceTable` - Weighted aggregate of partial concordances
//! - `outranks` - Majority-threshold outranking relation
//! - `MajoritySorter` - Pessimistic and optimistic assignment procedures
//! - `SortingReport` - Output document with both assignments and a summary
//!
//! # Design Philosophy
//!
//! All tables are built once per run and read-only afterwards. Functions are
//! pure and synchronous; validation happens while the tables are built so
//! that the sorting procedures themselves cannot fail on well-formed input.

mod assignment;
mod category;
mod criterion;
mod global_concordance;
mod majority_sorting;
mod outranking;
mod partial_concordance;
mod performance_table;
mod report;

pub use assignment::{Assignment, AssignmentMap, Procedure};
pub use category::CategoryScale;
pub use criterion::{CriteriaSet, Criterion};
pub use global_concordance::{GlobalConcordance, GlobalConcordanceTable};
pub use majority_sorting::MajoritySorter;
pub use outranking::{outranks, Outranking};
pub use partial_concordance::{compare, PartialConcordance, PartialConcordanceTable};
pub use performance_table::{Item, PerformanceTable, PerformanceTableBuilder, Profile};
pub use report::{AssignmentRow, DivergentItem, SortingReport, SortingSummary};
