//! Measure duration validation
//!
//! - `resolver`: effective time signature per measure (carry-forward)
//! - `measure`: per-measure, per-voice duration check
//! - `report`: whole-score report and summary statistics
//! - `settings`: tolerance and boundary-measure options

pub mod measure;
pub mod report;
pub mod resolver;
pub mod settings;

pub use measure::{tally_voice, validate_measure, validate_measure_at, voice_is_valid, MeasureResult, VoiceTally};
pub use report::{validate_all, validate_all_with, AggregateReport, ReportSummary};
pub use resolver::{resolve_default, resolve_signatures};
pub use settings::{BoundaryMode, ValidationSettings, TOLERANCE};
