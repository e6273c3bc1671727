//! Optimization direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether larger or smaller values are preferred on a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Max,
    Min,
}

/// Tag that is neither `max` nor `min`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl Direction {
    /// Returns the wire tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Direction::Max => "max",
            Direction::Min => "min",
        }
    }

    /// Returns the opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            Direction::Max => Direction::Min,
            Direction::Min => Direction::Max,
        }
    }

    /// Returns true if `a` is at least as good as `b` under this direction.
    pub fn at_least_as_good(&self, a: f64, b: f64) -> bool {
        match self {
            Direction::Max => a >= b,
            Direction::Min => b >= a,
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(Direction::Max),
            "min" => Ok(Direction::Min),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("max".parse::<Direction>(), Ok(Direction::Max));
        assert_eq!(" MIN ".parse::<Direction>(), Ok(Direction::Min));
        assert_eq!("Max".parse::<Direction>(), Ok(Direction::Max));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(
            "maximize".parse::<Direction>(),
            Err(UnknownDirection("maximize".to_string()))
        );
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn max_prefers_larger_values() {
        assert!(Direction::Max.at_least_as_good(3.0, 2.0));
        assert!(!Direction::Max.at_least_as_good(2.0, 3.0));
    }

    #[test]
    fn min_prefers_smaller_values() {
        assert!(Direction::Min.at_least_as_good(2.0, 3.0));
        assert!(!Direction::Min.at_least_as_good(3.0, 2.0));
    }

    #[test]
    fn equal_values_are_at_least_as_good_both_ways() {
        for direction in [Direction::Max, Direction::Min] {
            assert!(direction.at_least_as_good(1.5, 1.5));
        }
    }

    #[test]
    fn reversed_swaps_direction() {
        assert_eq!(Direction::Max.reversed(), Direction::Min);
        assert_eq!(Direction::Min.reversed(), Direction::Max);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Min).unwrap(), "\"min\"");
    }
}
