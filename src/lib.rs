//! ELECTRE TRI - Multicriteria Sorting
//!
//! This crate assigns items evaluated on several criteria to ordered
//! categories, by comparing each item with reference profiles that bound
//! the categories. Both the pessimistic and the optimistic majority
//! procedures are computed for every run.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
