//! PII detection and redaction engine
//!
//! This module is the core of Veil: it scans free-form text (typed messages
//! and voice-call transcripts) for categories of personally identifiable
//! information, scores each candidate match, validates categories that carry
//! a structural invariant, resolves overlapping spans, and substitutes
//! accepted spans with category-specific redaction tokens.
//!
//! # Pipeline
//!
//! - **Patterns**: per-category regex sets ([`patterns::PatternRegistry`])
//! - **Scanner**: raw candidate production ([`scanner::PatternScanner`])
//! - **Validators**: Luhn and IPv4 checks ([`validators`])
//! - **Confidence**: per-category scoring ([`confidence::ConfidenceScorer`])
//! - **Resolver**: threshold + overlap resolution ([`resolver::resolve`])
//! - **Redactor**: span splicing ([`redactor::redact`])
//! - **Engine**: orchestration, local and hybrid ([`engine::DetectionEngine`])
//! - **Statistics**: batch summaries ([`stats::BatchStatistics`])

pub mod audit;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod models;
pub mod patterns;
pub mod redactor;
pub mod resolver;
pub mod scanner;
pub mod stats;
pub mod validators;

// Re-export main types
pub use config::DetectionConfig;
pub use engine::DetectionEngine;
pub use models::{DetectionResult, MatchSource, PiiCategory, PiiMatch, Provenance};
pub use stats::BatchStatistics;
