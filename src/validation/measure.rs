//! Per-measure duration check
//!
//! Each voice's event durations are summed sequentially (a total-duration
//! check, not a timeline check) and compared with the duration the time
//! signature requires. Chords contribute their single duration once.

use num_traits::Signed;
use serde::Serialize;

use crate::models::serde_helpers::{as_display, beats_as_f64};
use crate::models::{Beats, Event, Hand, Measure, MeasureId, MeasurePosition, TimeSignature};
use crate::parse::parse_duration;

use super::settings::{ValidationSettings, TOLERANCE};

/// Sum of one voice's event durations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VoiceTally {
    pub total: Beats,
    /// Indices of events whose duration the parser did not recognize
    pub unrecognized: Vec<usize>,
}

/// Add up a voice's durations in order
pub fn tally_voice(events: &[Event]) -> VoiceTally {
    events
        .iter()
        .enumerate()
        .fold(VoiceTally::default(), |mut tally, (idx, event)| {
            let parsed = parse_duration(&event.duration);
            if !parsed.recognized {
                tally.unrecognized.push(idx);
            }
            tally.total += parsed.beats;
            tally
        })
}

/// Whether a voice total is acceptable for a measure at `position`.
///
/// Strict rule: `|actual - expected| <= TOLERANCE`.
/// Boundary (first/last) measures also accept a partial voice with
/// `min(minimum_partial_beats, expected) <= actual <= expected + TOLERANCE`.
pub fn voice_is_valid(
    actual: Beats,
    expected: Beats,
    position: MeasurePosition,
    settings: &ValidationSettings,
) -> bool {
    if (actual - expected).abs() <= TOLERANCE {
        return true;
    }

    if !position.is_boundary() {
        return false;
    }

    let floor = settings.minimum_partial_beats.min(expected);
    actual >= floor && actual <= expected + TOLERANCE
}

/// Validation result for a single measure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureResult {
    pub measure_id: MeasureId,

    #[serde(serialize_with = "as_display")]
    pub time_signature: TimeSignature,

    #[serde(serialize_with = "beats_as_f64")]
    pub expected_duration: Beats,

    #[serde(serialize_with = "beats_as_f64")]
    pub right_hand_duration: Beats,

    #[serde(serialize_with = "beats_as_f64")]
    pub left_hand_duration: Beats,

    pub right_hand_valid: bool,
    pub left_hand_valid: bool,
    pub both_valid: bool,

    #[serde(serialize_with = "beats_as_f64")]
    pub right_hand_error: Beats,

    #[serde(serialize_with = "beats_as_f64")]
    pub left_hand_error: Beats,

    pub position: MeasurePosition,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub right_hand_unrecognized: Vec<usize>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub left_hand_unrecognized: Vec<usize>,
}

impl MeasureResult {
    pub fn duration(&self, hand: Hand) -> Beats {
        match hand {
            Hand::RightHand => self.right_hand_duration,
            Hand::LeftHand => self.left_hand_duration,
        }
    }

    pub fn is_valid(&self, hand: Hand) -> bool {
        match hand {
            Hand::RightHand => self.right_hand_valid,
            Hand::LeftHand => self.left_hand_valid,
        }
    }

    pub fn error(&self, hand: Hand) -> Beats {
        match hand {
            Hand::RightHand => self.right_hand_error,
            Hand::LeftHand => self.left_hand_error,
        }
    }

    pub fn unrecognized(&self, hand: Hand) -> &[usize] {
        match hand {
            Hand::RightHand => &self.right_hand_unrecognized,
            Hand::LeftHand => &self.left_hand_unrecognized,
        }
    }

    /// True when some event in either voice fell back to zero beats
    pub fn has_unrecognized(&self) -> bool {
        !self.right_hand_unrecognized.is_empty() || !self.left_hand_unrecognized.is_empty()
    }
}

/// Validate a measure strictly against its effective time signature
pub fn validate_measure(measure: &Measure, signature: TimeSignature) -> MeasureResult {
    validate_measure_at(
        measure,
        signature,
        MeasurePosition::Middle,
        &ValidationSettings::default(),
    )
}

/// Validate a measure at a given position in its score
pub fn validate_measure_at(
    measure: &Measure,
    signature: TimeSignature,
    position: MeasurePosition,
    settings: &ValidationSettings,
) -> MeasureResult {
    let expected = signature.expected_beats();
    let right = tally_voice(&measure.right_hand);
    let left = tally_voice(&measure.left_hand);

    let right_hand_valid = voice_is_valid(right.total, expected, position, settings);
    let left_hand_valid = voice_is_valid(left.total, expected, position, settings);

    for (hand, tally) in [(Hand::RightHand, &right), (Hand::LeftHand, &left)] {
        if !tally.unrecognized.is_empty() {
            log::warn!(
                "Measure {}: {} has unrecognized durations at events {:?}",
                measure.id,
                hand.label(),
                tally.unrecognized
            );
        }
    }

    let result = MeasureResult {
        measure_id: measure.id.clone(),
        time_signature: signature,
        expected_duration: expected,
        right_hand_duration: right.total,
        left_hand_duration: left.total,
        right_hand_valid,
        left_hand_valid,
        both_valid: right_hand_valid && left_hand_valid,
        right_hand_error: (right.total - expected).abs(),
        left_hand_error: (left.total - expected).abs(),
        position,
        right_hand_unrecognized: right.unrecognized,
        left_hand_unrecognized: left.unrecognized,
    };

    log::debug!(
        "Measure {} ({}): expected {}, right {}, left {}, valid={}",
        result.measure_id,
        result.time_signature,
        result.expected_duration,
        result.right_hand_duration,
        result.left_hand_duration,
        result.both_valid
    );

    result
}
