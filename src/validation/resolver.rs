//! Time signature resolution
//!
//! A measure without its own signature inherits the most recent explicit
//! one; the first such measure inherits the score default (4/4 if absent).
//! Resolution is a left fold materialized into an ordered list, so the
//! per-measure checks that follow are independent of each other.

use crate::errors::Result;
use crate::models::{Measure, TimeSignature, TimeSignatureSpec};

/// Resolve a score-level default, falling back to common time
pub fn resolve_default(spec: Option<&TimeSignatureSpec>) -> Result<TimeSignature> {
    spec.map_or(Ok(TimeSignature::COMMON), TimeSignatureSpec::resolve)
}

/// Effective signature for every measure, in measure order
pub fn resolve_signatures(
    default: TimeSignature,
    measures: &[Measure],
) -> Result<Vec<TimeSignature>> {
    measures
        .iter()
        .scan(default, |current, measure| {
            let resolved = match &measure.time_signature {
                Some(spec) => spec.resolve().map(|sig| {
                    if sig != *current {
                        log::debug!("Measure {}: time signature changes to {}", measure.id, sig);
                    }
                    *current = sig;
                    sig
                }),
                None => Ok(*current),
            };
            Some(resolved)
        })
        .collect()
}
