//! Performance Table - arena of items and boundary profiles with their evaluations.

use std::collections::HashMap;

use super::CriteriaSet;
use crate::domain::foundation::{EntityKind, ItemId, ProfileId, SortingError};

/// An alternative to classify.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub evaluation: Vec<f64>,
}

/// A category boundary profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    /// 1-based rank; rank 1 is the lowest boundary.
    pub rank: usize,
    pub evaluation: Vec<f64>,
}

/// Items and profiles evaluated on a common criteria set.
///
/// Entities are stored once and referenced by handle. Profiles are kept in
/// rank order so that `ProfileId(k)` is the boundary of rank `k + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceTable {
    criteria_count: usize,
    items: Vec<Item>,
    profiles: Vec<Profile>,
    item_index: HashMap<String, ItemId>,
    profile_index: HashMap<String, ProfileId>,
}

impl PerformanceTable {
    /// Creates a builder for the given criteria.
    pub fn builder(criteria: &CriteriaSet) -> PerformanceTableBuilder<'_> {
        PerformanceTableBuilder::new(criteria)
    }

    /// Number of criteria every evaluation vector covers.
    pub fn criteria_count(&self) -> usize {
        self.criteria_count
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of profiles.
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Item handles in input order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> {
        (0..self.items.len()).map(ItemId::new)
    }

    /// Profile handles from the lowest boundary to the highest.
    pub fn profile_ids(&self) -> impl Iterator<Item = ProfileId> {
        (0..self.profiles.len()).map(ProfileId::new)
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    pub fn profile(&self, id: ProfileId) -> &Profile {
        &self.profiles[id.index()]
    }

    /// Looks up an item handle by name.
    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.item_index.get(name).copied()
    }

    /// Looks up a profile handle by name.
    pub fn profile_id(&self, name: &str) -> Option<ProfileId> {
        self.profile_index.get(name).copied()
    }

    /// Iterates items in input order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Iterates profiles from the lowest boundary to the highest.
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }
}

/// Builder for constructing validated PerformanceTable instances.
#[derive(Debug)]
pub struct PerformanceTableBuilder<'a> {
    criteria: &'a CriteriaSet,
    items: Vec<Item>,
    profiles: Vec<Profile>,
}

impl<'a> PerformanceTableBuilder<'a> {
    /// Creates a new builder.
    pub fn new(criteria: &'a CriteriaSet) -> Self {
        Self {
            criteria,
            items: Vec::new(),
            profiles: Vec::new(),
        }
    }

    /// Adds an item.
    pub fn item(mut self, name: impl Into<String>, evaluation: Vec<f64>) -> Self {
        self.items.push(Item {
            name: name.into(),
            evaluation,
        });
        self
    }

    /// Adds a boundary profile with its 1-based rank.
    pub fn profile(mut self, name: impl Into<String>, rank: usize, evaluation: Vec<f64>) -> Self {
        self.profiles.push(Profile {
            name: name.into(),
            rank,
            evaluation,
        });
        self
    }

    /// Validates the entities and builds the table.
    ///
    /// # Errors
    /// - `DimensionMismatch` if a vector length differs from the criteria count
    /// - `InvalidEvaluation` if a value is NaN or infinite
    /// - `DuplicateKey` if two items or two profiles share a name
    /// - `InvalidProfileRanking` if ranks are not exactly `1..=p`
    /// - `ProfilesNotOrdered` if a higher profile is worse than a lower one
    pub fn build(self) -> Result<PerformanceTable, SortingError> {
        let criteria = self.criteria;

        let mut item_index = HashMap::with_capacity(self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            check_evaluation(criteria, EntityKind::Item, &item.name, &item.evaluation)?;
            if item_index.insert(item.name.clone(), ItemId::new(i)).is_some() {
                return Err(SortingError::duplicate_key(EntityKind::Item, &item.name));
            }
        }

        let mut profiles = self.profiles;
        for profile in &profiles {
            check_evaluation(criteria, EntityKind::Profile, &profile.name, &profile.evaluation)?;
        }
        profiles.sort_by_key(|p| p.rank);

        let mut profile_index = HashMap::with_capacity(profiles.len());
        for (k, profile) in profiles.iter().enumerate() {
            if profile_index.insert(profile.name.clone(), ProfileId::new(k)).is_some() {
                return Err(SortingError::duplicate_key(EntityKind::Profile, &profile.name));
            }
            if profile.rank != k + 1 {
                return Err(SortingError::invalid_ranking(format!(
                    "expected ranks 1..={} without gaps or repeats, profile '{}' has rank {}",
                    profiles.len(),
                    profile.name,
                    profile.rank
                )));
            }
        }

        for pair in profiles.windows(2) {
            let (lower, higher) = (&pair[0], &pair[1]);
            for (j, criterion) in criteria.iter().enumerate() {
                if !criterion
                    .direction
                    .at_least_as_good(higher.evaluation[j], lower.evaluation[j])
                {
                    return Err(SortingError::ProfilesNotOrdered {
                        lower: lower.name.clone(),
                        higher: higher.name.clone(),
                        criterion: criterion.name.clone(),
                    });
                }
            }
        }

        Ok(PerformanceTable {
            criteria_count: criteria.len(),
            items: self.items,
            profiles,
            item_index,
            profile_index,
        })
    }
}

fn check_evaluation(
    criteria: &CriteriaSet,
    kind: EntityKind,
    name: &str,
    evaluation: &[f64],
) -> Result<(), SortingError> {
    if evaluation.len() != criteria.len() {
        return Err(SortingError::dimension_mismatch(
            format!("evaluation of {} '{}'", kind, name),
            criteria.len(),
            evaluation.len(),
        ));
    }
    for (value, criterion) in evaluation.iter().zip(criteria.iter()) {
        if !value.is_finite() {
            return Err(SortingError::InvalidEvaluation {
                kind,
                entity: name.to_string(),
                criterion: criterion.name.clone(),
            });
        }
    }
    Ok(())
}
