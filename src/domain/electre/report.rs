//! Sorting Report - the output document of one run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AssignmentMap, CategoryScale};
use crate::domain::foundation::{MajorityThreshold, RunId, Timestamp};

/// One row of an assignment section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub item: String,
    pub category: String,
}

/// Item whose two procedures disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergentItem {
    pub item: String,
    pub pessimistic: String,
    pub optimistic: String,
}

/// Distribution of items over categories and procedure disagreements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingSummary {
    pub total_items: usize,
    /// Item count per category label, every category included.
    pub pessimistic_distribution: BTreeMap<String, usize>,
    pub optimistic_distribution: BTreeMap<String, usize>,
    pub divergent_items: Vec<DivergentItem>,
}

impl SortingSummary {
    /// Summarizes both assignment maps of a run.
    pub fn from_assignments(
        categories: &CategoryScale,
        pessimistic: &AssignmentMap,
        optimistic: &AssignmentMap,
    ) -> Self {
        let divergent_items = pessimistic
            .iter()
            .filter_map(|p| {
                let o = optimistic.get(&p.item)?;
                (o.level != p.level).then(|| DivergentItem {
                    item: p.item.clone(),
                    pessimistic: p.category.clone(),
                    optimistic: o.category.clone(),
                })
            })
            .collect();

        Self {
            total_items: pessimistic.len(),
            pessimistic_distribution: distribution(categories, pessimistic),
            optimistic_distribution: distribution(categories, optimistic),
            divergent_items,
        }
    }

    /// Returns true if both procedures agree on every item.
    pub fn is_unanimous(&self) -> bool {
        self.divergent_items.is_empty()
    }
}

fn distribution(categories: &CategoryScale, assignments: &AssignmentMap) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = categories
        .labels()
        .iter()
        .map(|label| (label.clone(), 0))
        .collect();
    for assignment in assignments.iter() {
        *counts.entry(assignment.category.clone()).or_insert(0) += 1;
    }
    counts
}

/// Result document of a sorting run.
///
/// Serialized with two named sections, one per procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingReport {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    pub threshold: MajorityThreshold,
    /// Category labels, lowest first.
    pub categories: Vec<String>,
    #[serde(rename = "pessimistic_categories")]
    pub pessimistic: Vec<AssignmentRow>,
    #[serde(rename = "optimistic_categories")]
    pub optimistic: Vec<AssignmentRow>,
    pub summary: SortingSummary,
}

impl SortingReport {
    /// Builds the report of a completed run.
    pub fn new(
        threshold: MajorityThreshold,
        categories: &CategoryScale,
        pessimistic: &AssignmentMap,
        optimistic: &AssignmentMap,
    ) -> Self {
        Self {
            run_id: RunId::new(),
            computed_at: Timestamp::now(),
            threshold,
            categories: categories.labels().to_vec(),
            pessimistic: rows(pessimistic),
            optimistic: rows(optimistic),
            summary: SortingSummary::from_assignments(categories, pessimistic, optimistic),
        }
    }

    /// Category assigned to `item` by the pessimistic procedure.
    pub fn pessimistic_category(&self, item: &str) -> Option<&str> {
        find(&self.pessimistic, item)
    }

    /// Category assigned to `item` by the optimistic procedure.
    pub fn optimistic_category(&self, item: &str) -> Option<&str> {
        find(&self.optimistic, item)
    }
}

fn rows(assignments: &AssignmentMap) -> Vec<AssignmentRow> {
    assignments
        .iter()
        .map(|a| AssignmentRow {
            item: a.item.clone(),
            category: a.category.clone(),
        })
        .collect()
}

fn find<'a>(rows: &'a [AssignmentRow], item: &str) -> Option<&'a str> {
    rows.iter()
        .find(|r| r.item == item)
        .map(|r| r.category.as_str())
}
