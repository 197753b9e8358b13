//! Diagnostics module for raw score data
//!
//! Generic diagnostic marks pointing at a location in the input JSON.
//! The structural shape check is the first customer; the marks are plain
//! data so a front end can highlight them next to the extracted score.

pub mod structure;

use serde::{Deserialize, Serialize};

pub use structure::{check_structure, StructureReport};

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A diagnostic mark for an issue at a specific location
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMark {
    /// JSON-pointer style location, e.g. "/measures/2/left_hand/0"
    pub path: String,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "missing_measures", "event_not_object")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        path: impl Into<String>,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn error(path: impl Into<String>, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, DiagnosticSeverity::Error, kind, message)
    }

    pub fn warning(path: impl Into<String>, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, DiagnosticSeverity::Warning, kind, message)
    }
}

/// Collection of diagnostic marks for one score
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    /// All diagnostic marks
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    /// Messages of all marks with the given severity, in order
    pub fn messages(&self, severity: DiagnosticSeverity) -> Vec<String> {
        self.marks
            .iter()
            .filter(|m| m.severity == severity)
            .map(|m| m.message.clone())
            .collect()
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
