//! Structural check of raw score JSON
//!
//! Runs on the untyped value before decoding so that shape problems are
//! reported per location instead of as a single deserialization error.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::models::Hand;

/// Outcome of a structural check
#[derive(Debug, Clone, Serialize)]
pub struct StructureReport {
    /// "success" when there are no errors, otherwise "error"
    pub status: &'static str,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub measure_count: usize,
    pub has_key: bool,
    pub has_tempo: bool,
    pub marks: Vec<DiagnosticMark>,
}

impl StructureReport {
    fn build(diags: Diagnostics, score: &Map<String, Value>) -> Self {
        let valid = !diags.has_errors();
        Self {
            status: if valid { "success" } else { "error" },
            valid,
            errors: diags.messages(DiagnosticSeverity::Error),
            warnings: diags.messages(DiagnosticSeverity::Warning),
            measure_count: score
                .get("measures")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
            has_key: score.contains_key("key"),
            has_tempo: score.contains_key("tempo"),
            marks: diags.marks,
        }
    }
}

/// Check the shape of a score value. Never fails.
pub fn check_structure(value: &Value) -> StructureReport {
    let empty = Map::new();
    let mut diags = Diagnostics::new();

    let score = match value.as_object() {
        Some(score) => score,
        None => {
            diags.add(DiagnosticMark::error(
                "",
                "score_not_object",
                "Music data must be a JSON object",
            ));
            return StructureReport::build(diags, &empty);
        }
    };

    if !score.contains_key("measures") && !score.contains_key("notes") {
        diags.add(DiagnosticMark::error(
            "",
            "missing_measures",
            "Missing 'measures' or 'notes' field",
        ));
    }

    if let Some(measures) = score.get("measures") {
        match measures.as_array() {
            Some(measures) => {
                for (i, measure) in measures.iter().enumerate() {
                    check_measure(&mut diags, i, measure);
                }
            }
            None => diags.add(DiagnosticMark::error(
                "/measures",
                "measures_not_array",
                "'measures' must be an array",
            )),
        }
    }

    if !score.contains_key("key") {
        diags.add(DiagnosticMark::warning("/key", "missing_key", "Missing 'key' field"));
    }
    if !score.contains_key("tempo") {
        diags.add(DiagnosticMark::warning("/tempo", "missing_tempo", "Missing 'tempo' field"));
    }

    let report = StructureReport::build(diags, score);
    if !report.valid {
        log::warn!("Structure check found {} error(s)", report.errors.len());
    }
    report
}

fn check_measure(diags: &mut Diagnostics, i: usize, measure: &Value) {
    let path = format!("/measures/{}", i);
    let measure = match measure.as_object() {
        Some(measure) => measure,
        None => {
            diags.add(DiagnosticMark::error(
                path,
                "measure_not_object",
                format!("Measure {} is not an object", i),
            ));
            return;
        }
    };

    if !measure.contains_key("id") {
        diags.add(DiagnosticMark::warning(
            format!("{}/id", path),
            "missing_id",
            format!("Measure {} missing 'id' field", i),
        ));
    }

    for hand in Hand::BOTH {
        let Some(events) = measure.get(hand.key()) else {
            continue;
        };
        let hand_path = format!("{}/{}", path, hand.key());

        let Some(events) = events.as_array() else {
            diags.add(DiagnosticMark::error(
                hand_path,
                "hand_not_array",
                format!("Measure {} {} is not an array", i, hand.key()),
            ));
            continue;
        };

        for (j, event) in events.iter().enumerate() {
            let event_path = format!("{}/{}", hand_path, j);
            let Some(event) = event.as_object() else {
                diags.add(DiagnosticMark::error(
                    event_path,
                    "event_not_object",
                    format!("Measure {} {} event {} is not an object", i, hand.key(), j),
                ));
                continue;
            };

            for field in ["notes", "duration"] {
                if !event.contains_key(field) {
                    diags.add(DiagnosticMark::warning(
                        format!("{}/{}", event_path, field),
                        format!("missing_{}", field),
                        format!("Measure {} {} event {} missing '{}'", i, hand.key(), j, field),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_score() {
        let report = check_structure(&json!({
            "key": "C Major",
            "tempo": "120",
            "measures": [{
                "id": 1,
                "right_hand": [{"notes": ["C4"], "duration": "whole"}],
                "left_hand": [{"notes": ["C3"], "duration": "whole"}]
            }]
        }));

        assert!(report.valid);
        assert_eq!(report.status, "success");
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.measure_count, 1);
        assert!(report.has_key && report.has_tempo);
    }

    #[test]
    fn test_missing_measures() {
        let report = check_structure(&json!({"key": "C", "tempo": 90}));
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Missing 'measures' or 'notes' field"]);
    }

    #[test]
    fn test_not_an_object() {
        let report = check_structure(&json!([1, 2, 3]));
        assert!(!report.valid);
        assert_eq!(report.marks[0].kind, "score_not_object");
        assert_eq!(report.measure_count, 0);
    }

    #[test]
    fn test_nested_problems_are_located() {
        let report = check_structure(&json!({
            "measures": [
                "oops",
                {"right_hand": "C4 quarter", "left_hand": [{"notes": ["C3"]}, 5]}
            ]
        }));

        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec![
                "Measure 0 is not an object",
                "Measure 1 right_hand is not an array",
                "Measure 1 left_hand event 1 is not an object",
            ]
        );
        assert_eq!(
            report.warnings,
            vec![
                "Measure 1 missing 'id' field",
                "Measure 1 left_hand event 0 missing 'duration'",
                "Missing 'key' field",
                "Missing 'tempo' field",
            ]
        );

        let paths: Vec<&str> = report
            .marks
            .iter()
            .filter(|m| m.severity == DiagnosticSeverity::Error)
            .map(|m| m.path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec!["/measures/0", "/measures/1/right_hand", "/measures/1/left_hand/1"]
        );
    }

    #[test]
    fn test_measures_not_array() {
        let report = check_structure(&json!({"measures": {"1": []}}));
        assert_eq!(report.errors, vec!["'measures' must be an array"]);
        assert_eq!(report.measure_count, 0);
    }
}
