//! Position-based redaction
//!
//! Rewrites the original text in one left-to-right pass, copying the gaps
//! between resolved spans verbatim and substituting each span with its
//! category's redaction token. Output depends only on the input text and the
//! match spans, never on a token's surface text, so repeated identical
//! substrings are each redacted correctly.

use crate::detection::models::PiiMatch;

/// Build the redacted text from the original and the resolved match list.
///
/// `matches` must be sorted ascending by start offset and pairwise
/// non-overlapping (the resolver's postcondition).
pub fn redact(original: &str, matches: &[PiiMatch]) -> String {
    let mut redacted = String::with_capacity(original.len());
    let mut cursor = 0;

    for m in matches {
        debug_assert!(m.start >= cursor, "matches must be sorted and non-overlapping");
        debug_assert!(m.end <= original.len(), "span must lie inside the original text");

        redacted.push_str(&original[cursor..m.start]);
        redacted.push_str(m.category.redaction_token());
        cursor = m.end;
    }

    redacted.push_str(&original[cursor..]);
    redacted
}
