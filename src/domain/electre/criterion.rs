//! Criterion model - the ordered, weighted criteria of a sorting problem.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{Direction, EntityKind, SortingError};

/// A single evaluation criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub direction: Direction,
    pub weight: f64,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, direction: Direction, weight: f64) -> Self {
        Self {
            name: name.into(),
            direction,
            weight,
        }
    }

    /// Creates a criterion from a textual direction tag (`max` or `min`).
    pub fn from_tag(name: impl Into<String>, tag: &str, weight: f64) -> Result<Self, SortingError> {
        let name = name.into();
        let direction = tag
            .parse::<Direction>()
            .map_err(|_| SortingError::InvalidCriterionDirection {
                criterion: name.clone(),
                tag: tag.to_string(),
            })?;
        Ok(Self::new(name, direction, weight))
    }
}

/// Ordered set of criteria. Position `j` matches column `j` of every
/// evaluation vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
    index: HashMap<String, usize>,
}

impl CriteriaSet {
    /// Validates and wraps a list of criteria.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the list is empty
    /// - `DuplicateKey` if two criteria share a name
    /// - `InvalidWeight` if a weight is negative or not finite
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, SortingError> {
        if criteria.is_empty() {
            return Err(SortingError::dimension_mismatch("criteria (at least one)", 1, 0));
        }

        let mut index = HashMap::with_capacity(criteria.len());
        for (j, criterion) in criteria.iter().enumerate() {
            if !criterion.weight.is_finite() || criterion.weight < 0.0 {
                return Err(SortingError::InvalidWeight {
                    criterion: criterion.name.clone(),
                    weight: criterion.weight,
                });
            }
            if index.insert(criterion.name.clone(), j).is_some() {
                return Err(SortingError::duplicate_key(EntityKind::Criterion, &criterion.name));
            }
        }

        Ok(Self { criteria, index })
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Always false: a criteria set holds at least one criterion.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the criterion at position `j`.
    pub fn get(&self, j: usize) -> Option<&Criterion> {
        self.criteria.get(j)
    }

    /// Returns the position of a criterion by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterates criteria in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Criterion names in column order.
    pub fn names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name.as_str()).collect()
    }

    /// Weights in column order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrition_criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("Energy", Direction::Min, 1.0),
            Criterion::new("Sugar", Direction::Min, 1.0),
            Criterion::new("Protein", Direction::Max, 2.0),
        ]
    }

    #[test]
    fn from_tag_parses_direction() {
        let c = Criterion::from_tag("Fibre", "max", 2.0).unwrap();
        assert_eq!(c.direction, Direction::Max);
        assert_eq!(c.weight, 2.0);
    }

    #[test]
    fn from_tag_rejects_unknown_direction() {
        let err = Criterion::from_tag("Fibre", "best", 2.0).unwrap_err();
        assert_eq!(
            err,
            SortingError::InvalidCriterionDirection {
                criterion: "Fibre".to_string(),
                tag: "best".to_string(),
            }
        );
    }

    #[test]
    fn set_preserves_column_order() {
        let set = CriteriaSet::new(nutrition_criteria()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.names(), vec!["Energy", "Sugar", "Protein"]);
        assert_eq!(set.position("Protein"), Some(2));
        assert_eq!(set.position("Fat"), None);
    }

    #[test]
    fn set_exposes_weights() {
        let set = CriteriaSet::new(nutrition_criteria()).unwrap();
        assert_eq!(set.weights(), vec![1.0, 1.0, 2.0]);
        assert_eq!(set.total_weight(), 4.0);
    }

    #[test]
    fn set_rejects_empty_list() {
        let err = CriteriaSet::new(Vec::new()).unwrap_err();
        assert!(matches!(err, SortingError::DimensionMismatch { .. }));
    }

    #[test]
    fn set_rejects_duplicate_names() {
        let mut criteria = nutrition_criteria();
        criteria.push(Criterion::new("Sugar", Direction::Max, 1.0));

        let err = CriteriaSet::new(criteria).unwrap_err();
        assert_eq!(err, SortingError::duplicate_key(EntityKind::Criterion, "Sugar"));
    }

    #[test]
    fn set_rejects_negative_weight() {
        let criteria = vec![Criterion::new("Energy", Direction::Min, -1.0)];
        assert!(matches!(
            CriteriaSet::new(criteria),
            Err(SortingError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn set_rejects_nan_weight() {
        let criteria = vec![Criterion::new("Energy", Direction::Min, f64::NAN)];
        assert!(CriteriaSet::new(criteria).is_err());
    }

    #[test]
    fn set_accepts_zero_weights() {
        // A zero total only fails once concordances are aggregated.
        let criteria = vec![Criterion::new("Energy", Direction::Min, 0.0)];
        let set = CriteriaSet::new(criteria).unwrap();
        assert_eq!(set.total_weight(), 0.0);
    }
}
