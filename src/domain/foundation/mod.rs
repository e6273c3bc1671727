//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the sorting domain.

mod direction;
mod errors;
mod ids;
mod threshold;
mod timestamp;

pub use direction::{Direction, UnknownDirection};
pub use errors::{EntityKind, ErrorCode, SortingError};
pub use ids::{ItemId, ProfileId, RunId};
pub use threshold::MajorityThreshold;
pub use timestamp::Timestamp;
