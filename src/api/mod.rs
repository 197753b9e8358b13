//! Measure validator API
//!
//! # Module Structure
//!
//! - `helpers`: response envelopes and (de)serialization helpers
//! - `json`: request/response types and the JSON-text entry points
//! - `wasm`: `wasm_bindgen` exports for the JavaScript front end

pub mod helpers;
pub mod json;
pub mod wasm;

pub use helpers::Envelope;
pub use json::{
    check_structure_json, score_statistics_json, validate_measure_json, validate_score_json,
    MeasureRequest, MeasureResponse, ScoreRequest,
};
pub use wasm::{check_structure_js, score_statistics_js, validate_measure, validate_score};
