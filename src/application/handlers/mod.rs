//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod sort_items;

pub use sort_items::{SortItemsCommand, SortItemsError, SortItemsHandler, SortItemsResult};
