//! Partial Concordance - per-criterion binary comparisons of items against profiles.

use tracing::trace;

use super::{CriteriaSet, PerformanceTable};
use crate::domain::foundation::{Direction, ItemId, ProfileId, SortingError};

/// Partial concordance of one (item, profile) pair on one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialConcordance {
    /// `c_j(H, b)`: the item is at least as good as the profile.
    pub item_over_profile: u8,
    /// `c_j(b, H)`: the profile is at least as good as the item.
    pub profile_over_item: u8,
}

/// Compares two values on a criterion, returning `(c_j(X,Y), c_j(Y,X))`.
///
/// For `max`, X concords with "X at least as good as Y" when `x >= y`;
/// for `min` the comparison is inverted. Both are 1 when `x == y`.
pub fn compare(direction: Direction, x: f64, y: f64) -> (u8, u8) {
    (
        u8::from(direction.at_least_as_good(x, y)),
        u8::from(direction.at_least_as_good(y, x)),
    )
}

/// Dense table of partial concordances, indexed by criterion, item and profile.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialConcordanceTable {
    criteria_count: usize,
    item_count: usize,
    profile_count: usize,
    cells: Vec<PartialConcordance>,
}

impl PartialConcordanceTable {
    /// Computes partial concordances for every criterion and every item x profile pair.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the table was built for a different number of criteria
    pub fn compute(
        criteria: &CriteriaSet,
        table: &PerformanceTable,
    ) -> Result<Self, SortingError> {
        if table.criteria_count() != criteria.len() {
            return Err(SortingError::dimension_mismatch(
                "performance table criteria",
                criteria.len(),
                table.criteria_count(),
            ));
        }

        let item_count = table.item_count();
        let profile_count = table.profile_count();
        let mut cells = Vec::with_capacity(criteria.len() * item_count * profile_count);

        for (j, criterion) in criteria.iter().enumerate() {
            for item in table.items() {
                for profile in table.profiles() {
                    let (forward, backward) =
                        compare(criterion.direction, item.evaluation[j], profile.evaluation[j]);
                    cells.push(PartialConcordance {
                        item_over_profile: forward,
                        profile_over_item: backward,
                    });
                }
            }
        }

        trace!(
            criteria = criteria.len(),
            items = item_count,
            profiles = profile_count,
            "Computed partial concordance table"
        );

        Ok(Self {
            criteria_count: criteria.len(),
            item_count,
            profile_count,
            cells,
        })
    }

    pub fn criteria_count(&self) -> usize {
        self.criteria_count
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn profile_count(&self) -> usize {
        self.profile_count
    }

    /// Returns the partial concordance of `item` and `profile` on criterion `j`.
    ///
    /// # Panics
    /// Panics if `j` or either handle is out of range for this table.
    pub fn get(&self, j: usize, item: ItemId, profile: ProfileId) -> PartialConcordance {
        assert!(j < self.criteria_count, "criterion index out of range");
        assert!(item.index() < self.item_count, "item handle out of range");
        assert!(profile.index() < self.profile_count, "profile handle out of range");
        let offset = (j * self.item_count + item.index()) * self.profile_count + profile.index();
        self.cells[offset]
    }
}
