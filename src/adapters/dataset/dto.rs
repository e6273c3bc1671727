//! File DTOs for dataset tables.
//!
//! These types mirror the on-disk layout and are converted into domain
//! objects after parsing. Column names of the original French spreadsheets
//! (`type_critere`, `poids`) are accepted as aliases.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;

use crate::domain::electre::{CriteriaSet, Criterion};
use crate::domain::foundation::{EntityKind, SortingError};

// ════════════════════════════════════════════════════════════════════════════
// Criteria
// ════════════════════════════════════════════════════════════════════════════

/// Criteria table: one row per criterion, in column order.
#[derive(Debug, Clone, Deserialize)]
pub struct CriteriaFile {
    pub criteria: Vec<CriterionRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CriterionRecord {
    pub name: String,
    #[serde(alias = "type_critere")]
    pub direction: String,
    #[serde(alias = "poids")]
    pub weight: f64,
}

impl CriteriaFile {
    /// Converts rows into a validated criteria set.
    pub fn into_domain(self) -> Result<CriteriaSet, SortingError> {
        let criteria = self
            .criteria
            .into_iter()
            .map(|r| Criterion::from_tag(r.name, &r.direction, r.weight))
            .collect::<Result<Vec<_>, _>>()?;
        CriteriaSet::new(criteria)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Profiles and items
// ════════════════════════════════════════════════════════════════════════════

/// Evaluation cells of one row: either positional or keyed by criterion name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValuesRecord {
    Ordered(Vec<f64>),
    Keyed(KeyedCells),
}

/// Cells keyed by criterion name, in file order.
///
/// Every entry is kept, so a criterion named twice is reported rather than
/// silently overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedCells(Vec<(String, f64)>);

impl<'de> Deserialize<'de> for KeyedCells {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CellsVisitor;

        impl<'de> Visitor<'de> for CellsVisitor {
            type Value = KeyedCells;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of criterion name to value")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut cells = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, f64>()? {
                    cells.push(entry);
                }
                Ok(KeyedCells(cells))
            }
        }

        deserializer.deserialize_map(CellsVisitor)
    }
}

impl ValuesRecord {
    /// Resolves the cells into an evaluation vector in criteria order.
    ///
    /// Keyed rows must name exactly the criteria of the set.
    pub fn into_vector(
        self,
        criteria: &CriteriaSet,
        kind: EntityKind,
        entity: &str,
    ) -> Result<Vec<f64>, SortingError> {
        match self {
            ValuesRecord::Ordered(values) => Ok(values),
            ValuesRecord::Keyed(KeyedCells(cells)) => {
                let mut seen = HashSet::with_capacity(cells.len());
                for (key, _) in &cells {
                    if criteria.position(key).is_none() {
                        return Err(SortingError::dimension_mismatch(
                            format!("values of {} '{}' (unknown criterion '{}')", kind, entity, key),
                            criteria.len(),
                            cells.len(),
                        ));
                    }
                    if !seen.insert(key.as_str()) {
                        return Err(SortingError::duplicate_key(EntityKind::Criterion, key.as_str()));
                    }
                }
                criteria
                    .iter()
                    .map(|c| {
                        let cell = cells.iter().find(|(key, _)| *key == c.name);
                        cell.map(|(_, value)| *value).ok_or_else(|| {
                            SortingError::dimension_mismatch(
                                format!("values of {} '{}' (missing criterion '{}')", kind, entity, c.name),
                                criteria.len(),
                                cells.len(),
                            )
                        })
                    })
                    .collect()
            }
        }
    }
}

/// Profiles table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesFile {
    pub profiles: Vec<ProfileRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    /// 1 = lowest boundary.
    pub rank: usize,
    pub values: ValuesRecord,
}

/// Items table.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsFile {
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub values: ValuesRecord,
}
