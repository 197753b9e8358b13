//! Time signatures and their two wire forms ("3/4" or a numerator/denominator pair)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::models::Beats;

/// A resolved time signature. Both parts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per measure (3 in 3/4)
    pub numerator: u32,
    /// Note value of one beat (4 in 3/4)
    pub denominator: u32,
}

impl TimeSignature {
    /// Common time, used when a score declares nothing
    pub const COMMON: TimeSignature = TimeSignature {
        numerator: 4,
        denominator: 4,
    };

    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        Self::checked(
            numerator as i64,
            denominator as i64,
            &format!("{}/{}", numerator, denominator),
        )
    }

    fn checked(numerator: i64, denominator: i64, input: &str) -> Result<Self> {
        let to_part = |value: i64, name: &str| {
            u32::try_from(value)
                .ok()
                .filter(|v| *v > 0)
                .ok_or_else(|| ValidationError::MalformedTimeSignature {
                    input: input.to_string(),
                    reason: format!("{} must be a positive integer, got {}", name, value),
                })
        };

        Ok(Self {
            numerator: to_part(numerator, "numerator")?,
            denominator: to_part(denominator, "denominator")?,
        })
    }

    /// Expected length of one measure in quarter-note beats: `numerator * 4 / denominator`
    pub fn expected_beats(&self) -> Beats {
        Beats::new(self.numerator as i64 * 4, self.denominator as i64)
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::COMMON
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for TimeSignature {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &str| ValidationError::MalformedTimeSignature {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(malformed("expected exactly two '/'-separated integers"));
        }

        let numerator = parts[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed("numerator is not an integer"))?;
        let denominator = parts[1]
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed("denominator is not an integer"))?;

        Self::checked(numerator, denominator, s)
    }
}

/// A time signature as written in the input, not yet checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSignatureSpec {
    Text(String),
    Pair { numerator: i64, denominator: i64 },
}

impl TimeSignatureSpec {
    pub fn resolve(&self) -> Result<TimeSignature> {
        match self {
            Self::Text(text) => text.parse(),
            Self::Pair {
                numerator,
                denominator,
            } => TimeSignature::checked(
                *numerator,
                *denominator,
                &format!("{}/{}", numerator, denominator),
            ),
        }
    }
}

impl From<TimeSignature> for TimeSignatureSpec {
    fn from(sig: TimeSignature) -> Self {
        Self::Pair {
            numerator: sig.numerator as i64,
            denominator: sig.denominator as i64,
        }
    }
}

impl From<&str> for TimeSignatureSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_beats() {
        assert_eq!(TimeSignature::COMMON.expected_beats(), Beats::from_integer(4));
        assert_eq!(TimeSignature::new(3, 4).unwrap().expected_beats(), Beats::from_integer(3));
        assert_eq!(TimeSignature::new(6, 8).unwrap().expected_beats(), Beats::from_integer(3));
        assert_eq!(TimeSignature::new(5, 16).unwrap().expected_beats(), Beats::new(5, 4));
    }

    #[test]
    fn test_parse_text() {
        let sig: TimeSignature = " 6 / 8 ".parse().unwrap();
        assert_eq!(sig, TimeSignature::new(6, 8).unwrap());
        assert_eq!(sig.to_string(), "6/8");
    }

    #[test]
    fn test_parse_malformed_text() {
        for bad in ["4", "4/4/4", "three/4", "3/", "", "4/0", "-3/4"] {
            let err = bad.parse::<TimeSignature>().unwrap_err();
            assert!(
                matches!(err, ValidationError::MalformedTimeSignature { .. }),
                "expected malformed error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_spec_wire_forms() {
        let text: TimeSignatureSpec = serde_json::from_str(r#""2/4""#).unwrap();
        assert_eq!(text.resolve().unwrap(), TimeSignature::new(2, 4).unwrap());

        let pair: TimeSignatureSpec =
            serde_json::from_str(r#"{"numerator": 3, "denominator": 4}"#).unwrap();
        assert_eq!(pair.resolve().unwrap(), TimeSignature::new(3, 4).unwrap());

        let zero: TimeSignatureSpec =
            serde_json::from_str(r#"{"numerator": 3, "denominator": 0}"#).unwrap();
        assert!(zero.resolve().is_err());
    }
}
