//! Models module for the measure validator
//!
//! Input data model (scores, measures, events, duration expressions,
//! time signatures) plus the serde helpers used by reports.

pub mod duration;
pub mod score;
pub mod serde_helpers;
pub mod time_signature;

// Re-export commonly used types
pub use duration::*;
pub use score::*;
pub use time_signature::*;
