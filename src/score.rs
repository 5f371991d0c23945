//! The AQI score newtype

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::AqiCategory;

/// US AQI score, always within `0..=500`.
///
/// Serializes as a bare integer. Deserializing or converting a larger value
/// clamps it to 500.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "u16", into = "u16")]
pub struct AqiScore(u16);

impl AqiScore {
    /// Lowest possible score
    pub const MIN: Self = Self(0);
    /// Highest possible score
    pub const MAX: Self = Self(500);

    /// Round an interpolated AQI to the nearest integer and clamp it into range.
    ///
    /// Halves round up, `NaN` becomes 0.
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        let clamped = raw.clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0));
        // Clamped to 0..=500 above, the cast cannot truncate
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (clamped + 0.5).floor() as u16;
        Self(value.min(Self::MAX.0))
    }

    /// Numeric value of the score
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Category band this score falls into
    #[must_use]
    pub fn category(self) -> AqiCategory {
        crate::category::classify(self)
    }

    /// Whether the score is strictly above `threshold`
    #[must_use]
    pub fn exceeds(self, threshold: u16) -> bool {
        self.0 > threshold
    }
}

impl From<u16> for AqiScore {
    fn from(value: u16) -> Self {
        Self(value.min(Self::MAX.0))
    }
}

impl From<AqiScore> for u16 {
    fn from(score: AqiScore) -> Self {
        score.0
    }
}

impl fmt::Display for AqiScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0)]
    #[case(49.5, 50)]
    #[case(49.49, 49)]
    #[case(-12.0, 0)]
    #[case(500.4, 500)]
    #[case(9999.0, 500)]
    #[case(f64::NAN, 0)]
    #[case(f64::INFINITY, 500)]
    fn test_from_raw(#[case] raw: f64, #[case] expected: u16) {
        assert_eq!(AqiScore::from_raw(raw).value(), expected);
    }

    #[test]
    fn test_from_u16_clamps() {
        assert_eq!(AqiScore::from(720), AqiScore::MAX);
        assert_eq!(AqiScore::from(42).value(), 42);
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&AqiScore::from(151)).unwrap();
        assert_eq!(json, "151");

        let score: AqiScore = serde_json::from_str("800").unwrap();
        assert_eq!(score, AqiScore::MAX);
    }

    #[test]
    fn test_exceeds() {
        assert!(!AqiScore::from(150).exceeds(150));
        assert!(AqiScore::from(151).exceeds(150));
    }
}
