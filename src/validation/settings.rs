//! Validation settings
//!
//! The duration tolerance is fixed. What callers can choose is how the
//! first and last measures of a score are treated (pickup / anacrusis).

use serde::{Deserialize, Serialize};

use crate::models::{Beats, MeasurePosition};

/// Largest allowed |actual - expected| for a voice, in beats
pub const TOLERANCE: Beats = Beats::new_raw(1, 1000);

/// How boundary measures are judged by the aggregate reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Every measure must be complete
    #[default]
    Strict,
    /// First and last measures may be partial
    Pickup,
}

/// Configuration options for a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub boundary_measures: BoundaryMode,

    /// Smallest voice total accepted for a partial boundary measure.
    /// Capped at the measure's expected duration.
    pub minimum_partial_beats: Beats,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            boundary_measures: BoundaryMode::Strict,
            minimum_partial_beats: Beats::from_integer(1),
        }
    }
}

impl ValidationSettings {
    pub fn pickup() -> Self {
        Self {
            boundary_measures: BoundaryMode::Pickup,
            ..Self::default()
        }
    }

    /// Position of measure `index` in a score of `count` measures
    pub fn position_of(&self, index: usize, count: usize) -> MeasurePosition {
        match self.boundary_measures {
            BoundaryMode::Strict => MeasurePosition::Middle,
            BoundaryMode::Pickup if index == 0 => MeasurePosition::First,
            BoundaryMode::Pickup if index + 1 == count => MeasurePosition::Last,
            BoundaryMode::Pickup => MeasurePosition::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_positions_are_middle() {
        let settings = ValidationSettings::default();
        assert_eq!(settings.position_of(0, 3), MeasurePosition::Middle);
        assert_eq!(settings.position_of(2, 3), MeasurePosition::Middle);
    }

    #[test]
    fn test_pickup_positions() {
        let settings = ValidationSettings::pickup();
        assert_eq!(settings.position_of(0, 3), MeasurePosition::First);
        assert_eq!(settings.position_of(1, 3), MeasurePosition::Middle);
        assert_eq!(settings.position_of(2, 3), MeasurePosition::Last);
        assert_eq!(settings.position_of(0, 1), MeasurePosition::First);
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: ValidationSettings =
            serde_json::from_str(r#"{"boundary_measures": "pickup"}"#).unwrap();
        assert_eq!(settings.boundary_measures, BoundaryMode::Pickup);
        assert_eq!(settings.minimum_partial_beats, Beats::from_integer(1));
    }
}
