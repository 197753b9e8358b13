//! Parsing module for duration expressions
//!
//! `tables` holds the name and number-word lookups, `duration` resolves a
//! classified expression into exact beats.

pub mod duration;
pub mod tables;

// Re-export commonly used types
pub use duration::*;
