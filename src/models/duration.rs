//! Duration expressions as they arrive from the extraction pipeline
//!
//! The extraction collaborator writes durations in several surface forms:
//! a plain token ("dotted half"), a list (`["half", "sixteenth"]`), a
//! comma-joined sum ("half, sixteenth"), a product ("3 * eighth") or a
//! spelled-out count ("seven sixteenth"). Each raw value is classified once,
//! at deserialization time, into a closed [`DurationExpression`] so the
//! parser only has to match over variants.

use std::fmt;

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

use crate::parse::tables::{number_word, NUMBER_WORDS};

/// Exact number of quarter-note beats (quarter = 1).
pub type Beats = Rational64;

/// Render beats as floating point. Only used at the reporting boundary.
pub fn beats_to_f64(beats: &Beats) -> f64 {
    *beats.numer() as f64 / *beats.denom() as f64
}

/// A classified duration expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDuration", into = "RawDuration")]
pub enum DurationExpression {
    /// Absent, null or blank input
    Empty,

    /// Single table token, already normalized ("dotted quarter")
    Token(String),

    /// Ordered list; only the last element counts toward the voice total
    Sequence(Vec<DurationExpression>),

    /// Comma-joined parts, added together
    Sum(Vec<DurationExpression>),

    /// `<multiplier> * <base>`
    Product { multiplier: u32, base: String },

    /// Number word followed by a unit ("seven sixteenth")
    WordCount { count: u32, unit: String },
}

impl DurationExpression {
    /// Shorthand for a token expression
    pub fn token(name: &str) -> Self {
        Self::classify(name)
    }

    /// Classify a textual duration.
    ///
    /// Text is lower-cased and whitespace-collapsed first. Commas win over
    /// asterisks, which win over number words; anything else is a token.
    pub fn classify(text: &str) -> Self {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Self::Empty;
        }

        if normalized.contains(',') {
            return Self::Sum(normalized.split(',').map(Self::classify).collect());
        }

        if let Some((left, right)) = normalized.split_once('*') {
            // "2 * eighth * 3" keeps only the first base
            let base = right.split('*').next().unwrap_or_default().trim();
            return match left.trim().parse::<u32>() {
                Ok(multiplier) => Self::Product {
                    multiplier,
                    base: base.to_string(),
                },
                Err(_) => Self::Token(normalized),
            };
        }

        let mut words = normalized.split(' ');
        if let (Some(first), Some(unit)) = (words.next(), words.next()) {
            if let Some(count) = number_word(first) {
                return Self::WordCount {
                    count,
                    unit: unit.to_string(),
                };
            }
        }

        Self::Token(normalized)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Default for DurationExpression {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Display for DurationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Token(name) => f.write_str(name),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Sum(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
            Self::Product { multiplier, base } => write!(f, "{} * {}", multiplier, base),
            Self::WordCount { count, unit } => {
                let word = NUMBER_WORDS
                    .get((*count as usize).wrapping_sub(1))
                    .copied()
                    .unwrap_or("?");
                write!(f, "{} {}", word, unit)
            }
        }
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Wire form of a duration: whatever JSON the extractor produced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Text(String),
    List(Vec<RawDuration>),
    Other(serde_json::Value),
}

impl From<RawDuration> for DurationExpression {
    fn from(raw: RawDuration) -> Self {
        match raw {
            RawDuration::Text(text) => Self::classify(&text),
            RawDuration::List(items) if items.is_empty() => Self::Empty,
            RawDuration::List(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            RawDuration::Other(serde_json::Value::Null) => Self::Empty,
            RawDuration::Other(value) => Self::Token(normalize(&value.to_string())),
        }
    }
}

impl From<DurationExpression> for RawDuration {
    fn from(expr: DurationExpression) -> Self {
        match expr {
            DurationExpression::Empty => RawDuration::Other(serde_json::Value::Null),
            DurationExpression::Sequence(items) => {
                RawDuration::List(items.into_iter().map(RawDuration::from).collect())
            }
            other => RawDuration::Text(other.to_string()),
        }
    }
}

impl From<&str> for DurationExpression {
    fn from(text: &str) -> Self {
        Self::classify(text)
    }
}
