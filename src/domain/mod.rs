//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `electre` - Pure domain services for ELECTRE TRI sorting

pub mod electre;
pub mod foundation;
