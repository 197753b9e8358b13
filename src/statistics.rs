//! Descriptive statistics for an extracted score

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{Hand, Score};

const UNKNOWN_DURATION: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStatistics {
    pub key: String,
    pub tempo: String,
    pub measure_count: usize,
    pub total_events: usize,
    pub right_hand_events: usize,
    pub left_hand_events: usize,
    /// Sorted, without the rest sentinel
    pub unique_pitches: Vec<String>,
    pub unique_pitch_count: usize,
    /// Duration expression (normalized text) to number of events using it.
    /// A missing duration counts as "quarter", a null or blank one as "unknown".
    pub duration_types: BTreeMap<String, usize>,
}

pub fn score_statistics(score: &Score) -> ScoreStatistics {
    let mut pitches = BTreeSet::new();
    let mut duration_types = BTreeMap::new();
    let mut per_hand = [0usize; 2];

    for measure in &score.measures {
        for (slot, hand) in Hand::BOTH.into_iter().enumerate() {
            let events = measure.voice(hand);
            per_hand[slot] += events.len();

            for event in events {
                pitches.extend(event.pitches().map(str::to_string));
                let bucket = if event.duration.is_empty() {
                    UNKNOWN_DURATION.to_string()
                } else {
                    event.duration.to_string()
                };
                *duration_types.entry(bucket).or_insert(0) += 1;
            }
        }
    }

    let tempo = match &score.tempo {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "Unknown".to_string(),
    };

    let unique_pitches: Vec<String> = pitches.into_iter().collect();

    ScoreStatistics {
        key: score.key.clone().unwrap_or_else(|| "Unknown".to_string()),
        tempo,
        measure_count: score.measures.len(),
        total_events: per_hand[0] + per_hand[1],
        right_hand_events: per_hand[0],
        left_hand_events: per_hand[1],
        unique_pitch_count: unique_pitches.len(),
        unique_pitches,
        duration_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statistics() {
        let score = Score::from_value(json!({
            "key": "G Major",
            "tempo": 96,
            "measures": [
                {
                    "id": 1,
                    "right_hand": [
                        {"notes": ["D5", "B4"], "duration": "half"},
                        {"notes": ["Rest"], "duration": "half"}
                    ],
                    "left_hand": [{"notes": ["G3"], "duration": "Whole"}]
                },
                {
                    "id": 2,
                    "right_hand": [{"notes": ["D5"], "duration": "whole"}],
                    "left_hand": [{"notes": ["G3"], "duration": ["half", "half"]}]
                }
            ]
        }))
        .unwrap();

        let stats = score_statistics(&score);
        assert_eq!(stats.key, "G Major");
        assert_eq!(stats.tempo, "96");
        assert_eq!(stats.measure_count, 2);
        assert_eq!(stats.total_events, 5);
        assert_eq!(stats.right_hand_events, 3);
        assert_eq!(stats.left_hand_events, 2);
        assert_eq!(stats.unique_pitches, vec!["B4", "D5", "G3"]);
        assert_eq!(stats.unique_pitch_count, 3);
        assert_eq!(stats.duration_types.get("half"), Some(&2));
        assert_eq!(stats.duration_types.get("whole"), Some(&2));
        assert_eq!(stats.duration_types.get("[half, half]"), Some(&1));
    }

    #[test]
    fn test_duration_buckets_for_missing_and_null() {
        let score = Score::from_value(json!({
            "measures": [{
                "id": 1,
                "right_hand": [
                    {"notes": ["C4"]},
                    {"notes": ["D4"], "duration": null},
                    {"notes": ["E4"], "duration": "  "},
                    {"notes": ["F4"], "duration": "Quarter"}
                ]
            }]
        }))
        .unwrap();

        let stats = score_statistics(&score);
        assert_eq!(stats.duration_types.get("quarter"), Some(&2));
        assert_eq!(stats.duration_types.get("unknown"), Some(&2));
        assert!(!stats.duration_types.contains_key(""));
    }

    #[test]
    fn test_statistics_of_bare_score() {
        let stats = score_statistics(&Score::default());
        assert_eq!(stats.key, "Unknown");
        assert_eq!(stats.tempo, "Unknown");
        assert_eq!(stats.total_events, 0);
        assert!(stats.duration_types.is_empty());
    }
}
