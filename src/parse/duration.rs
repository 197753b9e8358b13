//! Duration expression parser
//!
//! Turns a classified [`DurationExpression`] into exact quarter-note beats.
//! Parsing never fails: anything the tables do not know is zero beats with
//! `recognized = false`, so a single bad field degrades into an invalid
//! measure instead of aborting the whole score.

use std::ops::Add;

use num_traits::Zero;

use crate::models::{Beats, DurationExpression};

use super::tables::lookup;

/// Outcome of parsing one duration expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDuration {
    pub beats: Beats,
    /// False when the parser fell back to zero
    pub recognized: bool,
}

impl ParsedDuration {
    fn known(beats: Beats) -> Self {
        Self {
            beats,
            recognized: true,
        }
    }

    fn unknown() -> Self {
        Self {
            beats: Beats::zero(),
            recognized: false,
        }
    }

    fn from_lookup(beats: Option<Beats>) -> Self {
        beats.map_or_else(Self::unknown, Self::known)
    }
}

impl Add for ParsedDuration {
    type Output = ParsedDuration;

    fn add(self, rhs: ParsedDuration) -> ParsedDuration {
        ParsedDuration {
            beats: self.beats + rhs.beats,
            recognized: self.recognized && rhs.recognized,
        }
    }
}

/// Parse a duration expression, keeping the recognition flag
pub fn parse_duration(expr: &DurationExpression) -> ParsedDuration {
    match expr {
        DurationExpression::Empty => ParsedDuration::unknown(),

        // Earlier elements describe a held note; the last one is the gap
        // before the voice's next event, which is all a sequential sum needs.
        DurationExpression::Sequence(items) => items
            .last()
            .map_or_else(ParsedDuration::unknown, parse_duration),

        DurationExpression::Sum(parts) => parts
            .iter()
            .map(parse_duration)
            .fold(ParsedDuration::known(Beats::zero()), |total, part| total + part),

        DurationExpression::Product { multiplier, base } => ParsedDuration::from_lookup(
            lookup(base).map(|beats| beats * Beats::from_integer(*multiplier as i64)),
        ),

        DurationExpression::WordCount { count, unit } => ParsedDuration::from_lookup(
            lookup(unit).map(|beats| beats * Beats::from_integer(*count as i64)),
        ),

        DurationExpression::Token(name) => ParsedDuration::from_lookup(lookup(name)),
    }
}

/// Parse a duration expression to beats
pub fn parse(expr: &DurationExpression) -> Beats {
    parse_duration(expr).beats
}

/// Classify and parse raw text in one step
pub fn parse_str(text: &str) -> Beats {
    parse(&DurationExpression::classify(text))
}
