//! Confidence scoring for raw pattern matches
//!
//! Converts a raw match plus its surrounding context into a confidence in
//! [0, 1]: a per-category base score with deterministic adjustments. The
//! acceptance threshold is a fixed constant, not derived per category.

use crate::detection::models::PiiCategory;
use crate::detection::validators::{digit_count, ipv4_octets_valid, luhn_valid};
use regex::Regex;

/// Acceptance threshold: only matches scoring strictly above this proceed
/// to resolution.
pub const CONFIDENCE_THRESHOLD: f32 = 0.70;

/// Confidence scorer with pre-compiled context probes
pub struct ConfidenceScorer {
    strict_phone: Regex,
    unit_marker: Regex,
}

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self {
            // Canonical parenthesized-area-code form: +1 (555) 123-4567
            strict_phone: Regex::new(r"^\+?1?[-.\s]?\(\d{3}\)[-.\s]?\d{3}[-.\s]?\d{4}$").unwrap(),
            // Apartment/suite/unit/floor markers near an address
            unit_marker: Regex::new(r"(?i)\b(?:apt|apartment|suite|unit|floor)\b|#").unwrap(),
        }
    }

    /// Score a raw match.
    ///
    /// `matched` is the matched substring, `context` the full text it was
    /// found in, `base` the pattern library's base confidence for the
    /// category.
    pub fn score(&self, category: PiiCategory, matched: &str, context: &str, base: f32) -> f32 {
        let confidence = match category {
            PiiCategory::PhoneNumber => {
                let mut confidence = base;
                if self.strict_phone.is_match(matched) {
                    confidence = 0.95;
                }
                // Numbers quoted next to a price are usually not phone numbers
                let context_lower = context.to_lowercase();
                if context_lower.contains("price") || context_lower.contains("cost") {
                    confidence = 0.30;
                }
                confidence
            }
            // Well-formed email patterns are rarely false positives
            PiiCategory::Email => 0.98,
            PiiCategory::Ssn => 0.95,
            PiiCategory::CreditCard => {
                if luhn_valid(matched) {
                    0.90
                } else {
                    0.60
                }
            }
            PiiCategory::Address => {
                if self.unit_marker.is_match(context) {
                    0.90
                } else {
                    base
                }
            }
            PiiCategory::IpAddress => {
                if ipv4_octets_valid(matched) {
                    0.90
                } else {
                    0.40
                }
            }
            PiiCategory::BankAccount => {
                // Card-length digit runs belong to the credit_card scorer:
                // score them below threshold so only a checksum-valid card
                // reading can redact them.
                if digit_count(matched) >= 13 {
                    0.60
                } else {
                    base
                }
            }
            _ => base,
        };

        confidence.clamp(0.0, 1.0)
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new()
    }
}
