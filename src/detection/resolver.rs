//! Match resolution: threshold filtering and overlap disambiguation
//!
//! Greedy interval scheduling over the scored candidates. Sorting by
//! resolution priority first makes the pass deterministic and
//! confidence-maximizing, and replaces naive sequential find/replace, which
//! corrupts offsets when the same literal substring occurs more than once or
//! when categories overlap a shared substring.

use crate::detection::models::PiiMatch;
use std::cmp::Ordering;

/// Filter candidates by the acceptance threshold and resolve overlapping
/// spans into a non-overlapping set ordered by start offset.
///
/// Candidates are ranked by (resolution priority desc, span length desc,
/// start offset asc); ranking ties across categories on the same span fall
/// back to category declaration order. A candidate is accepted only if its
/// span does not intersect any already-accepted span.
pub fn resolve(mut candidates: Vec<PiiMatch>, threshold: f32) -> Vec<PiiMatch> {
    candidates.retain(|m| m.confidence > threshold && !m.is_empty());

    candidates.sort_by(|a, b| {
        b.resolution_priority()
            .partial_cmp(&a.resolution_priority())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.category.cmp(&b.category))
    });

    let mut accepted: Vec<PiiMatch> = Vec::new();
    for candidate in candidates {
        if accepted.iter().all(|m| !m.overlaps(&candidate)) {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|m| m.start);
    accepted
}
