//! Measure Validator WASM Module
//!
//! Checks that every measure of an extracted piano score adds up to the
//! length its time signature demands, for each hand independently.

pub mod api;
pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod parse;
pub mod statistics;
pub mod validation;

// Re-export commonly used types
pub use errors::{Result, ValidationError};
pub use models::*;
pub use parse::{parse, parse_duration, parse_str, ParsedDuration};
pub use validation::{
    resolve_signatures, validate_all, validate_all_with, validate_measure, validate_measure_at,
    AggregateReport, BoundaryMode, MeasureResult, ValidationSettings, TOLERANCE,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (module re-instantiated) keeps the existing logger
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Measure validator WASM module initialized");
}
