//! Majority threshold value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SortingError;

/// Minimum weighted share of criteria required to declare outranking.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MajorityThreshold(f64);

impl MajorityThreshold {
    /// Creates a threshold, rejecting NaN and values outside `[0, 1]`.
    pub fn try_new(value: f64) -> Result<Self, SortingError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(SortingError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw fraction.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if a concordance index meets this threshold.
    pub fn is_met_by(&self, concordance: f64) -> bool {
        concordance >= self.0
    }
}

impl TryFrom<f64> for MajorityThreshold {
    type Error = SortingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<MajorityThreshold> for f64 {
    fn from(threshold: MajorityThreshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for MajorityThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_accepts_bounds_and_interior() {
        assert!(MajorityThreshold::try_new(0.0).is_ok());
        assert!(MajorityThreshold::try_new(0.65).is_ok());
        assert!(MajorityThreshold::try_new(1.0).is_ok());
    }

    #[test]
    fn threshold_rejects_out_of_range() {
        assert_eq!(
            MajorityThreshold::try_new(1.01),
            Err(SortingError::InvalidThreshold(1.01))
        );
        assert!(MajorityThreshold::try_new(-0.1).is_err());
    }

    #[test]
    fn threshold_rejects_nan() {
        assert!(MajorityThreshold::try_new(f64::NAN).is_err());
    }

    #[test]
    fn threshold_is_met_inclusively() {
        let t = MajorityThreshold::try_new(0.5).unwrap();
        assert!(t.is_met_by(0.5));
        assert!(t.is_met_by(0.75));
        assert!(!t.is_met_by(0.49));
    }

    #[test]
    fn zero_threshold_is_always_met() {
        let t = MajorityThreshold::try_new(0.0).unwrap();
        assert!(t.is_met_by(0.0));
    }

    #[test]
    fn threshold_deserializes_with_validation() {
        let t: MajorityThreshold = serde_json::from_str("0.7").unwrap();
        assert_eq!(t.value(), 0.7);
        assert!(serde_json::from_str::<MajorityThreshold>("1.7").is_err());
    }

    #[test]
    fn threshold_serializes_as_number() {
        let json = serde_json::to_string(&MajorityThreshold::try_new(0.5).unwrap()).unwrap();
        assert_eq!(json, "0.5");
    }
}
