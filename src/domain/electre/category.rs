//! Category Scale - the totally ordered categories items are sorted into.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{EntityKind, SortingError};

/// Ordered category labels, lowest category first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryScale(Vec<String>);

impl CategoryScale {
    /// Creates a scale from labels listed lowest first.
    ///
    /// Labels are trimmed. Fails on an empty list (`DimensionMismatch`),
    /// a blank label (`EmptyCategoryLabel`) or a repeated label (`DuplicateKey`).
    pub fn new<I, S>(labels: I) -> Result<Self, SortingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|l| l.into().trim().to_string())
            .collect();

        if labels.is_empty() {
            return Err(SortingError::dimension_mismatch("categories (at least one)", 1, 0));
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if label.is_empty() {
                return Err(SortingError::EmptyCategoryLabel);
            }
            if !seen.insert(label.as_str()) {
                return Err(SortingError::duplicate_key(EntityKind::Category, label));
            }
        }

        Ok(Self(labels))
    }

    /// Parses a comma-separated list, lowest category first.
    pub fn parse_list(list: &str) -> Result<Self, SortingError> {
        Self::new(list.split(','))
    }

    /// Number of categories (`r`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a scale holds at least one category.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Label at level `k` (0 = lowest).
    pub fn label(&self, k: usize) -> Option<&str> {
        self.0.get(k).map(String::as_str)
    }

    /// Level of a label.
    pub fn level_of(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|l| l == label)
    }

    /// Level of the lowest category.
    pub fn lowest(&self) -> usize {
        0
    }

    /// Level of the highest category.
    pub fn highest(&self) -> usize {
        self.0.len() - 1
    }

    /// Labels from lowest to highest.
    pub fn labels(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for CategoryScale {
    type Error = SortingError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<CategoryScale> for Vec<String> {
    fn from(scale: CategoryScale) -> Self {
        scale.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_list() {
        let scale = CategoryScale::parse_list("E, D, C ,B,A").unwrap();
        assert_eq!(scale.len(), 5);
        assert_eq!(scale.label(0), Some("E"));
        assert_eq!(scale.label(4), Some("A"));
        assert_eq!(scale.label(5), None);
    }

    #[test]
    fn levels_are_positions() {
        let scale = CategoryScale::new(["low", "mid", "high"]).unwrap();
        assert_eq!(scale.lowest(), 0);
        assert_eq!(scale.highest(), 2);
        assert_eq!(scale.level_of("mid"), Some(1));
        assert_eq!(scale.level_of("top"), None);
    }

    #[test]
    fn rejects_empty_scale() {
        assert!(matches!(
            CategoryScale::new(Vec::<String>::new()),
            Err(SortingError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_blank_label() {
        assert_eq!(
            CategoryScale::parse_list("E,,A"),
            Err(SortingError::EmptyCategoryLabel)
        );
    }

    #[test]
    fn rejects_repeated_label() {
        assert_eq!(
            CategoryScale::parse_list("E,D,E"),
            Err(SortingError::duplicate_key(EntityKind::Category, "E"))
        );
    }

    #[test]
    fn single_category_is_both_lowest_and_highest() {
        let scale = CategoryScale::new(["only"]).unwrap();
        assert_eq!(scale.lowest(), scale.highest());
    }

    #[test]
    fn serde_validates_labels() {
        let scale: CategoryScale = serde_json::from_str(r#"["E","D"]"#).unwrap();
        assert_eq!(scale.labels(), &["E".to_string(), "D".to_string()]);
        assert!(serde_json::from_str::<CategoryScale>("[]").is_err());
    }
}
