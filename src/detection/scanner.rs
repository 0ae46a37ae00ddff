//! Regex-based candidate scanner

use crate::detection::models::{MatchSource, PiiCategory, PiiMatch};
use crate::detection::patterns::PatternRegistry;
use std::sync::Arc;

/// Produces raw candidate matches from the pattern library.
///
/// The scan is pure: it walks every category's patterns over the input and
/// reports each hit at the pattern's base confidence. Candidates from
/// different categories may overlap; scoring and disambiguation happen
/// downstream.
pub struct PatternScanner {
    registry: Arc<PatternRegistry>,
}

impl PatternScanner {
    /// Create a new scanner over a shared pattern registry
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }

    /// Scan text for raw candidates across all categories
    ///
    /// When a pattern defines capture group 1 (the name-introduction
    /// patterns), the candidate span is the captured group rather than the
    /// whole phrase.
    pub fn scan(&self, text: &str) -> Vec<PiiMatch> {
        let mut candidates = Vec::new();
        if text.is_empty() {
            return candidates;
        }

        for category in PiiCategory::ALL {
            let Some(patterns) = self.registry.patterns_for_category(category) else {
                continue;
            };

            for pattern in patterns {
                for captures in pattern.regex.captures_iter(text) {
                    let Some(matched) = captures.get(1).or_else(|| captures.get(0)) else {
                        continue;
                    };
                    if matched.as_str().is_empty() {
                        continue;
                    }

                    candidates.push(PiiMatch::new(
                        category,
                        matched.as_str(),
                        matched.start(),
                        matched.end(),
                        pattern.confidence,
                        MatchSource::Local,
                    ));
                }
            }
        }

        candidates
    }
}
