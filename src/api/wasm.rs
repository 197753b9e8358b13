//! WASM API for score validation
//!
//! JavaScript-facing wrappers around the JSON operations. Inputs are plain
//! JS objects; outputs are status-tagged plain objects. Only a failure to
//! build the output value is thrown as a JS exception.

use wasm_bindgen::prelude::*;

use crate::diagnostics::check_structure;
use crate::models::Score;
use crate::statistics::score_statistics;

use super::helpers::{deserialize, error_envelope, serialize, Envelope};
use super::json::{
    run_measure_request, run_score_request, MeasureRequest, ScoreRequest, StatisticsResponse,
};

/// Validate a whole score object
#[wasm_bindgen(js_name = validateScore)]
pub fn validate_score(score: JsValue) -> Result<JsValue, JsValue> {
    let envelope = match deserialize::<ScoreRequest>(score, "Failed to read score") {
        Ok(request) => Envelope::from_result(run_score_request(&request), "validateScore"),
        Err(msg) => error_envelope("validateScore", msg),
    };
    serialize(&envelope, "Failed to serialize validation report")
}

/// Validate a single measure: `{ measure, time_signature?, position?, settings? }`
#[wasm_bindgen(js_name = validateMeasure)]
pub fn validate_measure(request: JsValue) -> Result<JsValue, JsValue> {
    let envelope = match deserialize::<MeasureRequest>(request, "Failed to read measure request") {
        Ok(request) => Envelope::from_result(run_measure_request(&request), "validateMeasure"),
        Err(msg) => error_envelope("validateMeasure", msg),
    };
    serialize(&envelope, "Failed to serialize measure result")
}

/// Structural check of a raw score object
#[wasm_bindgen(js_name = checkStructure)]
pub fn check_structure_js(score: JsValue) -> Result<JsValue, JsValue> {
    match deserialize::<serde_json::Value>(score, "Failed to read score") {
        Ok(value) => serialize(&check_structure(&value), "Failed to serialize structure report"),
        Err(msg) => serialize(
            &error_envelope::<()>("checkStructure", msg),
            "Failed to serialize structure report",
        ),
    }
}

/// Event, pitch and duration statistics for a score object
#[wasm_bindgen(js_name = scoreStatistics)]
pub fn score_statistics_js(score: JsValue) -> Result<JsValue, JsValue> {
    let envelope = match deserialize::<Score>(score, "Failed to read score") {
        Ok(score) => Envelope::Success(StatisticsResponse {
            statistics: score_statistics(&score),
        }),
        Err(msg) => error_envelope("scoreStatistics", msg),
    };
    serialize(&envelope, "Failed to serialize statistics")
}
