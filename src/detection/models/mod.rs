//! Detection data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// PII category enumeration
///
/// Closed set of categories the engine detects. The declaration order is
/// significant: it mirrors the order of the pattern library and is the final
/// tie-break when two candidates with equal priority claim the same span.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    /// Telephone numbers (US and international formats)
    PhoneNumber,
    /// Email addresses
    Email,
    /// Social Security Numbers
    Ssn,
    /// Payment card numbers (Luhn-validated)
    CreditCard,
    /// Street addresses
    Address,
    /// IPv4/IPv6 addresses
    IpAddress,
    /// Dates of birth
    DateOfBirth,
    /// Bank account numbers
    BankAccount,
    /// Driver license numbers
    DriverLicense,
    /// Passport numbers
    Passport,
    /// Names revealed by introduction phrases ("my name is ...")
    NamePattern,
}

impl PiiCategory {
    /// All categories, in declaration (resolution tie-break) order
    pub const ALL: [PiiCategory; 11] = [
        Self::PhoneNumber,
        Self::Email,
        Self::Ssn,
        Self::CreditCard,
        Self::Address,
        Self::IpAddress,
        Self::DateOfBirth,
        Self::BankAccount,
        Self::DriverLicense,
        Self::Passport,
        Self::NamePattern,
    ];

    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::PhoneNumber => "PHONE",
            Self::Email => "EMAIL",
            Self::Ssn => "SSN",
            Self::CreditCard => "CARD",
            Self::Address => "ADDRESS",
            Self::IpAddress => "IP_ADDRESS",
            Self::DateOfBirth => "DOB",
            Self::BankAccount => "ACCOUNT",
            Self::DriverLicense => "LICENSE",
            Self::Passport => "PASSPORT",
            Self::NamePattern => "NAME",
        }
    }

    /// Redaction token substituted for matched spans of this category
    ///
    /// Categories without a dedicated token fall back to the generic
    /// `[REDACTED]` placeholder.
    pub fn redaction_token(&self) -> &'static str {
        match self {
            Self::PhoneNumber => "[PHONE REDACTED]",
            Self::Email => "[EMAIL REDACTED]",
            Self::Ssn => "[SSN REDACTED]",
            Self::CreditCard => "[CARD REDACTED]",
            Self::Address => "[ADDRESS REDACTED]",
            Self::IpAddress => "[IP REDACTED]",
            Self::DateOfBirth => "[DOB REDACTED]",
            Self::NamePattern => "[NAME REDACTED]",
            Self::BankAccount | Self::DriverLicense | Self::Passport => "[REDACTED]",
        }
    }

    /// Parse a category label as emitted by the pattern library or the
    /// remote detector.
    ///
    /// Accepts both this crate's snake_case names and the NER-style labels
    /// the remote service emits (NAME, PERSON, LOCATION). Returns `None`
    /// for labels with no engine category (ORG, MISC, ...).
    pub fn parse_label(s: &str) -> Option<PiiCategory> {
        match s.to_uppercase().as_str() {
            "PHONE_NUMBER" | "PHONE" => Some(Self::PhoneNumber),
            "EMAIL" => Some(Self::Email),
            "SSN" => Some(Self::Ssn),
            "CREDIT_CARD" | "CARD" => Some(Self::CreditCard),
            "ADDRESS" | "LOCATION" => Some(Self::Address),
            "IP_ADDRESS" | "IP" => Some(Self::IpAddress),
            "DATE_OF_BIRTH" | "DOB" => Some(Self::DateOfBirth),
            "BANK_ACCOUNT" | "ACCOUNT" => Some(Self::BankAccount),
            "DRIVER_LICENSE" | "LICENSE" => Some(Self::DriverLicense),
            "PASSPORT" => Some(Self::Passport),
            "NAME_PATTERN" | "NAME" | "PERSON" => Some(Self::NamePattern),
            _ => None,
        }
    }
}

/// Origin of a match: the local regex pipeline or the remote detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Found by the local pattern scan
    Local,
    /// Reported by the remote detection service
    Remote,
}

impl MatchSource {
    /// Resolution-priority bonus for this source
    ///
    /// Remote matches outrank local matches on overlapping spans: the bonus
    /// lifts every remote candidate above the [0,1] confidence range.
    pub fn priority_bonus(&self) -> f32 {
        match self {
            Self::Local => 0.0,
            Self::Remote => 1.0,
        }
    }
}

/// A candidate or accepted PII match
///
/// Offsets are byte positions into the original text the match was found in.
/// Invariant: `start < end <= text.len()` of the scanned text, and both
/// offsets lie on char boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiiMatch {
    /// Category of PII
    pub category: PiiCategory,
    /// Matched text (the original span content)
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
    /// Which detector produced the match
    pub source: MatchSource,
}

impl PiiMatch {
    /// Create a new match, clamping confidence into [0, 1]
    pub fn new(
        category: PiiCategory,
        text: impl Into<String>,
        start: usize,
        end: usize,
        confidence: f32,
        source: MatchSource,
    ) -> Self {
        Self {
            category,
            text: text.into(),
            start,
            end,
            confidence: confidence.clamp(0.0, 1.0),
            source,
        }
    }

    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span is empty (degenerate match)
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when this match's span intersects `other`'s span
    pub fn overlaps(&self, other: &PiiMatch) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Priority used by the match resolver's greedy pass
    ///
    /// Confidence plus the source bonus, so remote-sourced matches win
    /// span collisions against local ones.
    pub fn resolution_priority(&self) -> f32 {
        self.confidence + self.source.priority_bonus()
    }
}

/// Provenance of a finished detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Local-only detection, as requested
    Local,
    /// Local and remote detections merged
    Hybrid,
    /// Hybrid was requested but the remote detector failed; local-only
    /// coverage was returned instead
    Degraded,
}

/// Result of one detection call
///
/// Immutable once returned. `redacted_text` is a pure function of
/// `(original_text, matches)`; `matches` is sorted by start offset and
/// pairwise non-overlapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// True when at least one match survived resolution
    pub has_redactions: bool,
    /// The text as received
    pub original_text: String,
    /// The text with accepted spans replaced by redaction tokens
    pub redacted_text: String,
    /// Categories present in the accepted matches
    pub categories: BTreeSet<PiiCategory>,
    /// Accepted matches, ordered by start offset, non-overlapping
    pub matches: Vec<PiiMatch>,
    /// How the result was produced
    pub provenance: Provenance,
}

impl DetectionResult {
    /// Build a result from resolved matches and the redacted text
    pub fn new(
        original_text: impl Into<String>,
        redacted_text: impl Into<String>,
        matches: Vec<PiiMatch>,
        provenance: Provenance,
    ) -> Self {
        let categories: BTreeSet<PiiCategory> = matches.iter().map(|m| m.category).collect();
        Self {
            has_redactions: !matches.is_empty(),
            original_text: original_text.into(),
            redacted_text: redacted_text.into(),
            categories,
            matches,
            provenance,
        }
    }

    /// Build a result for text with no accepted matches
    pub fn unredacted(text: impl Into<String>, provenance: Provenance) -> Self {
        let text = text.into();
        Self {
            has_redactions: false,
            original_text: text.clone(),
            redacted_text: text,
            categories: BTreeSet::new(),
            matches: Vec::new(),
            provenance,
        }
    }
}
