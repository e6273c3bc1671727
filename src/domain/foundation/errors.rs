//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Kind of named entity held in a keyed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Criterion,
    Item,
    Profile,
    Category,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Criterion => "criterion",
            EntityKind::Item => "item",
            EntityKind::Profile => "profile",
            EntityKind::Category => "category",
        };
        write!(f, "{}", s)
    }
}

/// Error codes, one per failure class of a sorting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DimensionMismatch,
    InvalidCriterionDirection,
    ZeroTotalWeight,
    InvalidWeight,
    InvalidThreshold,
    DuplicateKey,
    InvalidProfileRanking,
    ProfilesNotOrdered,
    InvalidEvaluation,
    EmptyCategoryLabel,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::InvalidCriterionDirection => "INVALID_CRITERION_DIRECTION",
            ErrorCode::ZeroTotalWeight => "ZERO_TOTAL_WEIGHT",
            ErrorCode::InvalidWeight => "INVALID_WEIGHT",
            ErrorCode::InvalidThreshold => "INVALID_THRESHOLD",
            ErrorCode::DuplicateKey => "DUPLICATE_KEY",
            ErrorCode::InvalidProfileRanking => "INVALID_PROFILE_RANKING",
            ErrorCode::ProfilesNotOrdered => "PROFILES_NOT_ORDERED",
            ErrorCode::InvalidEvaluation => "INVALID_EVALUATION",
            ErrorCode::EmptyCategoryLabel => "EMPTY_CATEGORY_LABEL",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while building the tables of a sorting run.
///
/// Every variant is fatal: a run either assigns every item or fails
/// before producing any assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortingError {
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid direction '{tag}' for criterion '{criterion}' (expected 'max' or 'min')")]
    InvalidCriterionDirection { criterion: String, tag: String },

    #[error("Total criteria weight is zero")]
    ZeroTotalWeight,

    #[error("Weight of criterion '{criterion}' must be a finite non-negative number, got {weight}")]
    InvalidWeight { criterion: String, weight: f64 },

    #[error("Majority threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error("Duplicate {kind} name '{name}'")]
    DuplicateKey { kind: EntityKind, name: String },

    #[error("Invalid profile ranking: {reason}")]
    InvalidProfileRanking { reason: String },

    #[error("Profile '{higher}' is ranked above '{lower}' but is worse on criterion '{criterion}'")]
    ProfilesNotOrdered {
        lower: String,
        higher: String,
        criterion: String,
    },

    #[error("Value of {kind} '{entity}' on criterion '{criterion}' is not a finite number")]
    InvalidEvaluation {
        kind: EntityKind,
        entity: String,
        criterion: String,
    },

    #[error("Category labels cannot be empty")]
    EmptyCategoryLabel,
}

impl SortingError {
    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        SortingError::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(kind: EntityKind, name: impl Into<String>) -> Self {
        SortingError::DuplicateKey {
            kind,
            name: name.into(),
        }
    }

    /// Creates an invalid profile ranking error.
    pub fn invalid_ranking(reason: impl Into<String>) -> Self {
        SortingError::InvalidProfileRanking {
            reason: reason.into(),
        }
    }

    /// Returns the stable code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SortingError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            SortingError::InvalidCriterionDirection { .. } => ErrorCode::InvalidCriterionDirection,
            SortingError::ZeroTotalWeight => ErrorCode::ZeroTotalWeight,
            SortingError::InvalidWeight { .. } => ErrorCode::InvalidWeight,
            SortingError::InvalidThreshold(_) => ErrorCode::InvalidThreshold,
            SortingError::DuplicateKey { .. } => ErrorCode::DuplicateKey,
            SortingError::InvalidProfileRanking { .. } => ErrorCode::InvalidProfileRanking,
            SortingError::ProfilesNotOrdered { .. } => ErrorCode::ProfilesNotOrdered,
            SortingError::InvalidEvaluation { .. } => ErrorCode::InvalidEvaluation,
            SortingError::EmptyCategoryLabel => ErrorCode::EmptyCategoryLabel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_displays_context() {
        let err = SortingError::dimension_mismatch("weights", 3, 2);
        assert_eq!(
            format!("{}", err),
            "Dimension mismatch in weights: expected 3, got 2"
        );
    }

    #[test]
    fn duplicate_key_displays_kind_and_name() {
        let err = SortingError::duplicate_key(EntityKind::Item, "apple");
        assert_eq!(format!("{}", err), "Duplicate item name 'apple'");
    }

    #[test]
    fn invalid_direction_displays_tag() {
        let err = SortingError::InvalidCriterionDirection {
            criterion: "Sugar".to_string(),
            tag: "avg".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid direction 'avg' for criterion 'Sugar' (expected 'max' or 'min')"
        );
    }

    #[test]
    fn code_matches_variant() {
        assert_eq!(SortingError::ZeroTotalWeight.code(), ErrorCode::ZeroTotalWeight);
        assert_eq!(
            SortingError::InvalidThreshold(1.5).code(),
            ErrorCode::InvalidThreshold
        );
        assert_eq!(
            SortingError::invalid_ranking("gap").code(),
            ErrorCode::InvalidProfileRanking
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DimensionMismatch), "DIMENSION_MISMATCH");
        assert_eq!(format!("{}", ErrorCode::DuplicateKey), "DUPLICATE_KEY");
    }
}
