//! JSON-in / JSON-out entry points
//!
//! These are the functions the extraction pipeline calls. They never
//! panic on bad input: failures come back as an error envelope.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{check_structure, StructureReport};
use crate::errors::Result;
use crate::models::serde_helpers::{as_display, beats_as_f64};
use crate::models::{Beats, Hand, Measure, MeasureId, MeasurePosition, Score, TimeSignature, TimeSignatureSpec};
use crate::statistics::{score_statistics, ScoreStatistics};
use crate::validation::{
    validate_all_with, validate_measure_at, AggregateReport, MeasureResult, ValidationSettings,
};

use super::helpers::{error_envelope, from_json_text, to_json_text, Envelope};

/// Request for a single-measure check
#[derive(Debug, Clone, Deserialize)]
pub struct MeasureRequest {
    pub measure: Measure,

    /// Used when the measure carries no signature of its own; 4/4 if absent
    #[serde(default)]
    pub time_signature: Option<TimeSignatureSpec>,

    #[serde(default)]
    pub position: MeasurePosition,

    #[serde(default)]
    pub settings: ValidationSettings,
}

/// Request for a whole-score check
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(flatten)]
    pub score: Score,

    #[serde(default)]
    pub settings: ValidationSettings,
}

/// One hand of a single-measure response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandSummary {
    #[serde(serialize_with = "beats_as_f64")]
    pub duration: Beats,
    pub valid: bool,
    #[serde(serialize_with = "beats_as_f64")]
    pub error: Beats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unrecognized: Vec<usize>,
}

/// Single-measure response payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasureResponse {
    pub valid: bool,
    pub measure_id: MeasureId,
    #[serde(serialize_with = "as_display")]
    pub time_signature: TimeSignature,
    #[serde(serialize_with = "beats_as_f64")]
    pub expected_duration: Beats,
    pub right_hand: HandSummary,
    pub left_hand: HandSummary,
}

impl From<MeasureResult> for MeasureResponse {
    fn from(result: MeasureResult) -> Self {
        let summary = |hand: Hand| HandSummary {
            duration: result.duration(hand),
            valid: result.is_valid(hand),
            error: result.error(hand),
            unrecognized: result.unrecognized(hand).to_vec(),
        };

        Self {
            valid: result.both_valid,
            right_hand: summary(Hand::RightHand),
            left_hand: summary(Hand::LeftHand),
            measure_id: result.measure_id.clone(),
            time_signature: result.time_signature,
            expected_duration: result.expected_duration,
        }
    }
}

/// Statistics response payload
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsResponse {
    pub statistics: ScoreStatistics,
}

// ============================================================================
// Typed operations (shared by the JSON and WASM surfaces)
// ============================================================================

pub fn run_score_request(request: &ScoreRequest) -> Result<AggregateReport> {
    validate_all_with(&request.score, &request.settings)
}

pub fn run_measure_request(request: &MeasureRequest) -> Result<MeasureResponse> {
    let spec = request
        .measure
        .time_signature
        .as_ref()
        .or(request.time_signature.as_ref());
    let signature = match spec {
        Some(spec) => spec.resolve()?,
        None => TimeSignature::COMMON,
    };

    let result = validate_measure_at(&request.measure, signature, request.position, &request.settings);
    Ok(result.into())
}

// ============================================================================
// JSON text surface
// ============================================================================

/// Validate a whole score given as JSON text
pub fn validate_score_json(json: &str) -> String {
    let envelope = from_json_text::<ScoreRequest>(json).and_then(|request| run_score_request(&request));
    to_json_text(&Envelope::from_result(envelope, "validate_score"))
}

/// Validate one measure given as JSON text (`{"measure": {...}, ...}`)
pub fn validate_measure_json(json: &str) -> String {
    let envelope =
        from_json_text::<MeasureRequest>(json).and_then(|request| run_measure_request(&request));
    to_json_text(&Envelope::from_result(envelope, "validate_measure"))
}

/// Structural check of score JSON text
pub fn check_structure_json(json: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(value) => to_json_text(&check_structure(&value)),
        Err(e) => to_json_text(&error_envelope::<StructureReport>("check_structure", e)),
    }
}

/// Statistics for score JSON text
pub fn score_statistics_json(json: &str) -> String {
    let envelope = from_json_text::<Score>(json).map(|score| StatisticsResponse {
        statistics: score_statistics(&score),
    });
    to_json_text(&Envelope::from_result(envelope, "score_statistics"))
}
