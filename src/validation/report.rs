//! Whole-score validation report
//!
//! Runs in two passes: time signatures are resolved for every measure up
//! front, then each measure is checked on its own.

use serde::Serialize;

use crate::errors::{Result, ValidationError};
use crate::models::serde_helpers::as_display;
use crate::models::{beats_to_f64, Beats, Hand, Score, TimeSignature};

use super::measure::{validate_measure_at, MeasureResult};
use super::resolver::{resolve_default, resolve_signatures};
use super::settings::ValidationSettings;

/// Errors above this many beats are worth a line in `describe_invalid`
const REPORTABLE_ERROR: Beats = Beats::new_raw(1, 100);

/// Per-voice summary statistics.
///
/// The averages are report values: errors from measures with unrelated
/// denominators have no common exact form that fits in an `i64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub right_hand_valid_count: usize,
    pub left_hand_valid_count: usize,
    pub average_right_hand_error: f64,
    pub average_left_hand_error: f64,
}

/// Validation result for a whole score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    /// The score's default signature, not any later override
    #[serde(serialize_with = "as_display")]
    pub time_signature: TimeSignature,
    pub total_measures: usize,
    pub valid_measures: usize,
    pub invalid_measures: usize,
    pub all_valid: bool,
    pub measure_results: Vec<MeasureResult>,
    pub summary: ReportSummary,
}

impl AggregateReport {
    /// Build the report from per-measure results in score order
    pub fn from_results(time_signature: TimeSignature, measure_results: Vec<MeasureResult>) -> Self {
        let total_measures = measure_results.len();
        let valid_measures = measure_results.iter().filter(|r| r.both_valid).count();
        let invalid_measures = total_measures - valid_measures;

        let valid_count = |hand: Hand| measure_results.iter().filter(|r| r.is_valid(hand)).count();
        let mean_error = |hand: Hand| {
            if total_measures == 0 {
                return 0.0;
            }
            let sum: f64 = measure_results
                .iter()
                .map(|r| beats_to_f64(&r.error(hand)))
                .sum();
            sum / total_measures as f64
        };

        let summary = ReportSummary {
            right_hand_valid_count: valid_count(Hand::RightHand),
            left_hand_valid_count: valid_count(Hand::LeftHand),
            average_right_hand_error: mean_error(Hand::RightHand),
            average_left_hand_error: mean_error(Hand::LeftHand),
        };

        Self {
            time_signature,
            total_measures,
            valid_measures,
            invalid_measures,
            all_valid: invalid_measures == 0,
            measure_results,
            summary,
        }
    }

    pub fn valid_results(&self) -> impl Iterator<Item = &MeasureResult> {
        self.measure_results.iter().filter(|r| r.both_valid)
    }

    pub fn invalid_results(&self) -> impl Iterator<Item = &MeasureResult> {
        self.measure_results.iter().filter(|r| !r.both_valid)
    }

    /// Human-readable lines for voices that are noticeably off,
    /// e.g. "Measure 3: Right hand off by 0.500 beats"
    pub fn describe_invalid(&self) -> Vec<String> {
        self.invalid_results()
            .flat_map(|result| {
                Hand::BOTH.into_iter().filter_map(move |hand| {
                    let error = result.error(hand);
                    (error > REPORTABLE_ERROR).then(|| {
                        format!(
                            "Measure {}: {} off by {:.3} beats",
                            result.measure_id,
                            hand.label(),
                            beats_to_f64(&error)
                        )
                    })
                })
            })
            .collect()
    }
}

/// Validate every measure of a score with default settings
pub fn validate_all(score: &Score) -> Result<AggregateReport> {
    validate_all_with(score, &ValidationSettings::default())
}

/// Validate every measure of a score
pub fn validate_all_with(score: &Score, settings: &ValidationSettings) -> Result<AggregateReport> {
    let default = resolve_default(score.time_signature.as_ref())?;

    if score.measures.is_empty() {
        return Err(ValidationError::EmptyScore);
    }

    let signatures = resolve_signatures(default, &score.measures)?;
    let count = score.measures.len();

    let results: Vec<MeasureResult> = score
        .measures
        .iter()
        .zip(signatures)
        .enumerate()
        .map(|(idx, (measure, signature))| {
            validate_measure_at(measure, signature, settings.position_of(idx, count), settings)
        })
        .collect();

    let report = AggregateReport::from_results(default, results);

    for line in report.describe_invalid() {
        log::warn!("{}", line);
    }
    log::info!(
        "Validated {} measures: {} valid, {} invalid",
        report.total_measures,
        report.valid_measures,
        report.invalid_measures
    );

    Ok(report)
}
