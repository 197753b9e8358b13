//! Two-hand score model produced by the extraction pipeline
//!
//! A score is an ordered list of measures; every measure has a right-hand
//! and a left-hand voice, each an ordered list of events.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::models::serde_helpers::null_as_default;
use crate::models::{DurationExpression, TimeSignatureSpec};

/// Pitch sentinel the extractor writes for rests
pub const REST: &str = "Rest";

/// Measure identifier as supplied (numbers and strings both occur)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasureId {
    Number(i64),
    Text(String),
}

impl Default for MeasureId {
    fn default() -> Self {
        MeasureId::Text("?".to_string())
    }
}

impl fmt::Display for MeasureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureId::Number(n) => write!(f, "{}", n),
            MeasureId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MeasureId {
    fn from(n: i64) -> Self {
        MeasureId::Number(n)
    }
}

impl From<i32> for MeasureId {
    fn from(n: i32) -> Self {
        MeasureId::Number(n as i64)
    }
}

impl From<&str> for MeasureId {
    fn from(s: &str) -> Self {
        MeasureId::Text(s.to_string())
    }
}

/// One of the two voices of a measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    RightHand,
    LeftHand,
}

impl Hand {
    pub const BOTH: [Hand; 2] = [Hand::RightHand, Hand::LeftHand];

    /// Field name in the wire format
    pub fn key(self) -> &'static str {
        match self {
            Hand::RightHand => "right_hand",
            Hand::LeftHand => "left_hand",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hand::RightHand => "Right hand",
            Hand::LeftHand => "Left hand",
        }
    }
}

/// Where a measure sits in its score; boundary measures may be partial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurePosition {
    First,
    Last,
    #[default]
    Middle,
}

impl MeasurePosition {
    pub fn is_boundary(self) -> bool {
        !matches!(self, MeasurePosition::Middle)
    }
}

fn default_duration() -> DurationExpression {
    DurationExpression::token("quarter")
}

/// A set of simultaneous pitches (or the rest sentinel) sharing one duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,

    /// Missing durations are read as a quarter note
    #[serde(default = "default_duration")]
    pub duration: DurationExpression,
}

impl Event {
    pub fn new(notes: &[&str], duration: impl Into<DurationExpression>) -> Self {
        Self {
            notes: notes.iter().map(|n| n.to_string()).collect(),
            duration: duration.into(),
        }
    }

    pub fn rest(duration: impl Into<DurationExpression>) -> Self {
        Self::new(&[REST], duration)
    }

    /// Sounding pitches, without the rest sentinel
    pub fn pitches(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().map(String::as_str).filter(|n| *n != REST)
    }

    pub fn is_chord(&self) -> bool {
        self.pitches().count() > 1
    }
}

/// A single measure with its two voices
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Measure {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: MeasureId,

    /// Measure-local override; carried forward to later measures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<TimeSignatureSpec>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub right_hand: Vec<Event>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub left_hand: Vec<Event>,
}

impl Measure {
    pub fn new(id: impl Into<MeasureId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_time_signature(mut self, spec: impl Into<TimeSignatureSpec>) -> Self {
        self.time_signature = Some(spec.into());
        self
    }

    pub fn with_voice(mut self, hand: Hand, events: Vec<Event>) -> Self {
        match hand {
            Hand::RightHand => self.right_hand = events,
            Hand::LeftHand => self.left_hand = events,
        }
        self
    }

    pub fn voice(&self, hand: Hand) -> &[Event] {
        match hand {
            Hand::RightHand => &self.right_hand,
            Hand::LeftHand => &self.left_hand,
        }
    }
}

/// A whole extracted score
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Tempo as the extractor wrote it ("120" or 120)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<serde_json::Value>,

    /// Global default; 4/4 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_signature: Option<TimeSignatureSpec>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub measures: Vec<Measure>,
}

impl Score {
    pub fn new(measures: Vec<Measure>) -> Self {
        Self {
            measures,
            ..Self::default()
        }
    }

    pub fn with_time_signature(mut self, spec: impl Into<TimeSignatureSpec>) -> Self {
        self.time_signature = Some(spec.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_measure_defaults() {
        let measure: Measure = serde_json::from_value(json!({
            "right_hand": [{"notes": ["C4"]}]
        }))
        .unwrap();

        assert_eq!(measure.id.to_string(), "?");
        assert!(measure.time_signature.is_none());
        assert!(measure.left_hand.is_empty());
        assert_eq!(measure.right_hand[0].duration, DurationExpression::token("quarter"));
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let measure: Measure = serde_json::from_value(json!({
            "id": null,
            "right_hand": null,
            "left_hand": [{"notes": null, "duration": "whole"}]
        }))
        .unwrap();

        assert_eq!(measure.id.to_string(), "?");
        assert!(measure.right_hand.is_empty());
        assert!(measure.left_hand[0].notes.is_empty());
        assert_eq!(measure.left_hand[0].duration, DurationExpression::token("whole"));

        let score = Score::from_value(json!({"measures": null})).unwrap();
        assert!(score.measures.is_empty());
    }

    #[test]
    fn test_measure_id_round_trips_kind() {
        let numbered: Measure = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(numbered.id, MeasureId::Number(7));
        assert_eq!(serde_json::to_value(&numbered.id).unwrap(), json!(7));

        let named: Measure = serde_json::from_value(json!({"id": "7a"})).unwrap();
        assert_eq!(serde_json::to_value(&named.id).unwrap(), json!("7a"));
    }

    #[test]
    fn test_event_pitches_skip_rest() {
        let chord = Event::new(&["C4", "E4", "G4"], "quarter");
        assert!(chord.is_chord());
        assert_eq!(chord.pitches().count(), 3);

        let rest = Event::rest("half");
        assert!(!rest.is_chord());
        assert_eq!(rest.pitches().count(), 0);
    }

    #[test]
    fn test_score_from_json_ignores_unknown_fields() {
        let score = Score::from_json(
            r#"{"piece_name": "Minuet", "tempo": "120", "extra": true, "measures": []}"#,
        )
        .unwrap();
        assert_eq!(score.piece_name.as_deref(), Some("Minuet"));
        assert_eq!(score.tempo, Some(json!("120")));
        assert!(score.measures.is_empty());
    }
}
