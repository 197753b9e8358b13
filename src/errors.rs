//! Error types for score validation
//!
//! Only structural problems are errors. An unrecognized duration token is
//! not: it counts as zero beats and shows up as an invalid measure.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A time signature that is not two positive `/`-separated integers
    #[error("Malformed time signature '{input}': {reason}")]
    MalformedTimeSignature { input: String, reason: String },

    /// The score has nothing to validate
    #[error("No measures found in music data")]
    EmptyScore,

    /// Input does not have the expected shape
    #[error("Invalid music data: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
