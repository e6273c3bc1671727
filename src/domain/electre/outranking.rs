//! Outranking Relation - thresholded global concordance.

use super::GlobalConcordanceTable;
use crate::domain::foundation::{ItemId, MajorityThreshold, ProfileId};

/// Outranking relation between an item and a profile, both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outranking {
    /// `H S b`: the item is at least as good as the profile overall.
    pub item_outranks_profile: bool,
    /// `b S H`: the profile is at least as good as the item overall.
    pub profile_outranks_item: bool,
}

impl Outranking {
    /// The profile outranks the item and the item does not outrank the profile.
    pub fn profile_strictly_preferred(&self) -> bool {
        self.profile_outranks_item && !self.item_outranks_profile
    }

    /// The item outranks the profile and the profile does not outrank the item.
    pub fn item_strictly_preferred(&self) -> bool {
        self.item_outranks_profile && !self.profile_outranks_item
    }

    /// Both outrank each other.
    pub fn is_indifferent(&self) -> bool {
        self.item_outranks_profile && self.profile_outranks_item
    }

    /// Neither outranks the other.
    pub fn is_incomparable(&self) -> bool {
        !self.item_outranks_profile && !self.profile_outranks_item
    }
}

/// Evaluates the outranking relation between `item` and `profile`.
///
/// # Panics
/// Panics if either handle does not belong to the table `global` was built from.
pub fn outranks(
    threshold: MajorityThreshold,
    item: ItemId,
    profile: ProfileId,
    global: &GlobalConcordanceTable,
) -> Outranking {
    let c = global.get(item, profile);
    Outranking {
        item_outranks_profile: threshold.is_met_by(c.item_over_profile),
        profile_outranks_item: threshold.is_met_by(c.profile_over_item),
    }
}
