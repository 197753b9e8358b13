// Time signature resolution across a score

use measure_validator::{validate_all, Beats, Measure, Score, TimeSignature, ValidationError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn ts(numerator: u32, denominator: u32) -> TimeSignature {
    TimeSignature::new(numerator, denominator).unwrap()
}

#[test]
fn test_expected_beats_for_common_signatures() {
    assert_eq!(ts(4, 4).expected_beats(), Beats::from_integer(4));
    assert_eq!(ts(3, 4).expected_beats(), Beats::from_integer(3));
    assert_eq!(ts(2, 4).expected_beats(), Beats::from_integer(2));
    assert_eq!(ts(6, 8).expected_beats(), Beats::from_integer(3));
    assert_eq!(ts(9, 8).expected_beats(), Beats::new(9, 2));
    assert_eq!(ts(2, 2).expected_beats(), Beats::from_integer(4));
}

#[test]
fn test_waltz_after_common_time() {
    let score = Score::from_value(json!({
        "time_signature": "4/4",
        "measures": [
            {
                "id": 1,
                "right_hand": [{"notes": ["C4"], "duration": "whole"}],
                "left_hand": [{"notes": ["C3"], "duration": "whole"}]
            },
            {
                "id": 2,
                "time_signature": "3/4",
                "right_hand": [{"notes": ["E4"], "duration": "dotted half"}],
                "left_hand": [
                    {"notes": ["C3"], "duration": "quarter"},
                    {"notes": ["E3", "G3"], "duration": "quarter"},
                    {"notes": ["E3", "G3"], "duration": "quarter"}
                ]
            },
            {
                "id": 3,
                "right_hand": [{"notes": ["D4"], "duration": "dotted half"}],
                "left_hand": [{"notes": ["G2"], "duration": "dotted half"}]
            }
        ]
    }))
    .unwrap();

    let report = validate_all(&score).unwrap();
    assert!(report.all_valid, "{:?}", report.describe_invalid());
    assert_eq!(report.time_signature, ts(4, 4));
    assert_eq!(report.measure_results[2].time_signature, ts(3, 4));
    assert_eq!(report.measure_results[2].expected_duration, Beats::from_integer(3));
}

#[test]
fn test_compound_meter_in_eighths() {
    let score = Score::from_value(json!({
        "time_signature": {"numerator": 6, "denominator": 8},
        "measures": [{
            "id": 1,
            "right_hand": [
                {"notes": ["G4"], "duration": "dotted quarter"},
                {"notes": ["A4"], "duration": "3 * eighth"}
            ],
            "left_hand": [{"notes": ["C3"], "duration": "six eighths"}]
        }]
    }))
    .unwrap();

    let report = validate_all(&score).unwrap();
    assert!(report.all_valid);
    assert_eq!(report.measure_results[0].right_hand_duration, Beats::from_integer(3));
    assert_eq!(report.measure_results[0].left_hand_duration, Beats::from_integer(3));
}

#[test]
fn test_malformed_signatures_are_errors() {
    for bad in ["3-4", "0/4", "4/0", "three/4", "4/4/4", ""] {
        let score = Score::new(vec![Measure::new(1)]).with_time_signature(bad);
        let err = validate_all(&score).unwrap_err();
        assert!(
            matches!(err, ValidationError::MalformedTimeSignature { .. }),
            "{:?} gave {:?}",
            bad,
            err
        );
    }

    let score = Score::from_value(json!({
        "measures": [
            {"id": 1},
            {"id": 2, "time_signature": {"numerator": -3, "denominator": 4}}
        ]
    }))
    .unwrap();
    assert!(matches!(
        validate_all(&score),
        Err(ValidationError::MalformedTimeSignature { .. })
    ));
}

#[test]
fn test_signature_text_is_trimmed() {
    assert_eq!(" 3 / 4 ".parse::<TimeSignature>().unwrap(), ts(3, 4));
}
