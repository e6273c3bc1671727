//! Global Concordance - weighted aggregation of partial concordances.

use tracing::trace;

use super::{CriteriaSet, PartialConcordanceTable};
use crate::domain::foundation::{ItemId, ProfileId, SortingError};

/// Global concordance indices of one (item, profile) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlobalConcordance {
    /// `C(H, b)`, in `[0, 1]`.
    pub item_over_profile: f64,
    /// `C(b, H)`, in `[0, 1]`.
    pub profile_over_item: f64,
}

/// Dense table of global concordances, indexed by item and profile.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalConcordanceTable {
    item_count: usize,
    profile_count: usize,
    cells: Vec<GlobalConcordance>,
}

impl GlobalConcordanceTable {
    /// Aggregates partial concordances with explicit weights.
    ///
    /// `C(X,Y) = Σ_j w_j · c_j(X,Y) / Σ_j w_j`
    ///
    /// # Errors
    /// - `DimensionMismatch` if `weights.len()` differs from the criteria count
    /// - `ZeroTotalWeight` if the weights sum to zero
    pub fn aggregate(
        weights: &[f64],
        partial: &PartialConcordanceTable,
    ) -> Result<Self, SortingError> {
        if weights.len() != partial.criteria_count() {
            return Err(SortingError::dimension_mismatch(
                "weights",
                partial.criteria_count(),
                weights.len(),
            ));
        }

        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            return Err(SortingError::ZeroTotalWeight);
        }

        let item_count = partial.item_count();
        let profile_count = partial.profile_count();
        let mut cells = Vec::with_capacity(item_count * profile_count);

        for i in 0..item_count {
            let item = ItemId::new(i);
            for k in 0..profile_count {
                let profile = ProfileId::new(k);
                let mut forward = 0.0;
                let mut backward = 0.0;
                for (j, weight) in weights.iter().enumerate() {
                    let c = partial.get(j, item, profile);
                    forward += weight * f64::from(c.item_over_profile);
                    backward += weight * f64::from(c.profile_over_item);
                }
                cells.push(GlobalConcordance {
                    item_over_profile: forward / total,
                    profile_over_item: backward / total,
                });
            }
        }

        trace!(
            items = item_count,
            profiles = profile_count,
            total_weight = total,
            "Aggregated global concordance table"
        );

        Ok(Self {
            item_count,
            profile_count,
            cells,
        })
    }

    /// Aggregates partial concordances using the criteria's own weights.
    pub fn from_criteria(
        criteria: &CriteriaSet,
        partial: &PartialConcordanceTable,
    ) -> Result<Self, SortingError> {
        Self::aggregate(&criteria.weights(), partial)
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn profile_count(&self) -> usize {
        self.profile_count
    }

    /// Returns the global concordances of `item` and `profile`.
    ///
    /// # Panics
    /// Panics if either handle is out of range for this table, as happens
    /// with a handle taken from a larger performance table.
    pub fn get(&self, item: ItemId, profile: ProfileId) -> GlobalConcordance {
        assert!(item.index() < self.item_count, "item handle out of range");
        assert!(profile.index() < self.profile_count, "profile handle out of range");
        self.cells[item.index() * self.profile_count + profile.index()]
    }
}
