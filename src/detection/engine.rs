//! Main detection engine
//!
//! This module provides the core [`DetectionEngine`] that orchestrates the
//! detection pipeline: pattern scan, confidence scoring, match resolution,
//! and redaction, with optional reconciliation against a remote detector.
//!
//! # Architecture
//!
//! A single detection call runs:
//! scan → score → resolve → redact, returning one [`DetectionResult`].
//! Hybrid calls run the local pipeline and the remote detector concurrently,
//! merge the two candidate sets (remote wins overlapping spans), then run a
//! single resolution and redaction pass over the merged set. Any remote
//! failure degrades to the local-only result; it is never surfaced to the
//! caller as an error.
//!
//! # Examples
//!
//! ```
//! use veil::detection::DetectionEngine;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = DetectionEngine::with_defaults()?;
//! let result = engine.detect("Call me at 555-123-4567");
//!
//! assert!(result.has_redactions);
//! assert_eq!(result.redacted_text, "Call me at [PHONE REDACTED]");
//! # Ok(())
//! # }
//! ```

use crate::detection::{
    audit::AuditLogger,
    confidence::ConfidenceScorer,
    config::DetectionConfig,
    models::{DetectionResult, PiiMatch, Provenance},
    patterns::PatternRegistry,
    redactor, resolver,
    scanner::PatternScanner,
};
use crate::remote::{RemoteDetection, RemoteDetector};
use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Main PII detection engine
///
/// # Thread Safety
///
/// Local detection is pure and synchronous with no shared mutable state
/// between calls: the engine can be shared across any number of concurrent
/// callers with `Arc` and no locking. The pattern registry is read-only
/// configuration loaded once at construction.
pub struct DetectionEngine {
    scanner: PatternScanner,
    scorer: ConfidenceScorer,
    threshold: f32,
    audit_logger: Option<AuditLogger>,
}

impl DetectionEngine {
    /// Create a new detection engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The pattern library cannot be loaded or compiled
    /// - Audit logger initialization fails
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid detection configuration")?;

        let registry = if let Some(ref pattern_path) = config.pattern_library {
            PatternRegistry::from_file(pattern_path)?
        } else {
            PatternRegistry::default_patterns()?
        };

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(config.audit.log_path.clone(), true)?)
        } else {
            None
        };

        Ok(Self {
            scanner: PatternScanner::new(Arc::new(registry)),
            scorer: ConfidenceScorer::new(),
            threshold: config.confidence_threshold,
            audit_logger,
        })
    }

    /// Create an engine with built-in patterns and default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(DetectionConfig::default())
    }

    /// Detect and redact PII using the local pipeline only
    ///
    /// Pure and synchronous. Empty input yields a result with no redactions;
    /// detection never fails.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let candidates = self.local_candidates(text);
        self.finish(text, candidates, Provenance::Local)
    }

    /// Detect and redact PII using the local pipeline and a remote detector
    ///
    /// The remote call runs concurrently with the local scan under the
    /// detector's timeout. On success the match sets are merged before
    /// resolution, with remote matches taking precedence on overlapping
    /// spans. On any remote failure the local-only result is returned,
    /// marked [`Provenance::Degraded`].
    pub async fn detect_hybrid(
        &self,
        text: &str,
        remote: &dyn RemoteDetector,
    ) -> DetectionResult {
        let local_task = async { self.local_candidates(text) };
        let remote_task = tokio::time::timeout(remote.timeout(), remote.detect_text(text));

        let (mut candidates, remote_outcome) = tokio::join!(local_task, remote_task);

        match remote_outcome {
            Ok(Ok(detection)) => {
                candidates.extend(detection.to_matches(text));
                self.finish(text, candidates, Provenance::Hybrid)
            }
            Ok(Err(error)) => {
                tracing::warn!(
                    error = %error,
                    "Remote detection failed, falling back to local-only result"
                );
                self.finish(text, candidates, Provenance::Degraded)
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = remote.timeout().as_secs(),
                    "Remote detection timed out, falling back to local-only result"
                );
                self.finish(text, candidates, Provenance::Degraded)
            }
        }
    }

    /// Detect and redact PII in a voice-call transcript
    ///
    /// When the voice pipeline already carries a remote detection payload
    /// for the transcript, it is merged exactly like a successful
    /// `/detect_pii` response; otherwise this is local-only detection.
    pub fn detect_transcript(
        &self,
        transcript: &str,
        embedded: Option<&RemoteDetection>,
    ) -> DetectionResult {
        match embedded {
            Some(detection) => {
                let mut candidates = self.local_candidates(transcript);
                candidates.extend(detection.to_matches(transcript));
                self.finish(transcript, candidates, Provenance::Hybrid)
            }
            None => self.detect(transcript),
        }
    }

    /// Detect PII in a batch of messages, local-only
    ///
    /// Each message's detection is independent; results are returned in
    /// input order.
    pub fn detect_batch<I, S>(&self, texts: I) -> Vec<DetectionResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.detect(text.as_ref()))
            .collect()
    }

    /// Detect PII in a batch of messages with the remote detector
    ///
    /// Fans out up to `concurrency` hybrid detections at a time; the
    /// returned vector preserves input order.
    pub async fn detect_batch_hybrid<'a, I>(
        &self,
        texts: I,
        remote: &dyn RemoteDetector,
        concurrency: usize,
    ) -> Vec<DetectionResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        stream::iter(texts)
            .map(|text| self.detect_hybrid(text, remote))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    /// Scan and score local candidates for one text
    fn local_candidates(&self, text: &str) -> Vec<PiiMatch> {
        self.scanner
            .scan(text)
            .into_iter()
            .map(|mut candidate| {
                candidate.confidence = self.scorer.score(
                    candidate.category,
                    &candidate.text,
                    text,
                    candidate.confidence,
                );
                candidate
            })
            .collect()
    }

    /// Resolve, redact, and assemble the final result
    fn finish(
        &self,
        text: &str,
        candidates: Vec<PiiMatch>,
        provenance: Provenance,
    ) -> DetectionResult {
        let resolved = resolver::resolve(candidates, self.threshold);
        let redacted = redactor::redact(text, &resolved);
        let result = DetectionResult::new(text, redacted, resolved, provenance);

        if let Some(ref logger) = self.audit_logger {
            if let Err(error) = logger.log_detection(&result) {
                // Fail-safe: auditing must never break message delivery
                tracing::error!(error = %error, "Failed to write detection audit entry");
            }
        }

        result
    }
}
