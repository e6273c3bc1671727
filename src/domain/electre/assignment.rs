//! Assignment Map - the category assigned to every item by one procedure.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{CategoryScale, PerformanceTable};

/// Which majority sorting procedure produced an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Procedure {
    Pessimistic,
    Optimistic,
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Procedure::Pessimistic => write!(f, "pessimistic"),
            Procedure::Optimistic => write!(f, "optimistic"),
        }
    }
}

/// Category assigned to a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub item: String,
    pub category: String,
    /// Position of the category on the scale (0 = lowest).
    pub level: usize,
}

/// One assignment per item, in item order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMap {
    procedure: Procedure,
    entries: Vec<Assignment>,
    index: HashMap<String, usize>,
}

impl AssignmentMap {
    /// Builds the map from per-item category levels indexed by item handle.
    pub(crate) fn from_levels(
        procedure: Procedure,
        table: &PerformanceTable,
        categories: &CategoryScale,
        levels: Vec<usize>,
    ) -> Self {
        let mut entries = Vec::with_capacity(levels.len());
        let mut index = HashMap::with_capacity(levels.len());

        for (item, level) in table.items().zip(levels) {
            index.insert(item.name.clone(), entries.len());
            entries.push(Assignment {
                item: item.name.clone(),
                category: categories.label(level).unwrap_or_default().to_string(),
                level,
            });
        }

        Self {
            procedure,
            entries,
            index,
        }
    }

    pub fn procedure(&self) -> Procedure {
        self.procedure
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the assignment of an item by name.
    pub fn get(&self, item: &str) -> Option<&Assignment> {
        self.index.get(item).map(|&i| &self.entries[i])
    }

    /// Category label assigned to an item.
    pub fn category_of(&self, item: &str) -> Option<&str> {
        self.get(item).map(|a| a.category.as_str())
    }

    /// Category level assigned to an item.
    pub fn level_of(&self, item: &str) -> Option<usize> {
        self.get(item).map(|a| a.level)
    }

    /// Iterates assignments in item order.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.iter()
    }
}
