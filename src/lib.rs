// Veil - PII detection and redaction engine
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - PII detection and redaction
//!
//! Veil scans free-form text (typed messages and voice-call transcripts) for
//! personally identifiable information, scores each candidate match, resolves
//! overlapping spans, and substitutes accepted spans with category-specific
//! redaction tokens. It can optionally reconcile its own pattern-based
//! detection with an external detection service.
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - The engine: patterns, scoring, resolution, redaction
//! - [`remote`] - HTTP client for the external detection service
//! - [`domain`] - Error hierarchy and result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::detection::DetectionEngine;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = DetectionEngine::with_defaults()?;
//!
//! let result = engine.detect("My card is 4111111111111111");
//! assert_eq!(result.redacted_text, "My card is [CARD REDACTED]");
//! # Ok(())
//! # }
//! ```
//!
//! ## Hybrid detection
//!
//! Hybrid calls run the local pipeline and the remote detector concurrently
//! and merge their outputs, with remote matches taking precedence on
//! overlapping spans. A remote failure never fails the call: the result
//! degrades to local-only coverage and its provenance records that.
//!
//! ```rust,no_run
//! use veil::config::RemoteConfig;
//! use veil::detection::DetectionEngine;
//! use veil::remote::HttpDetector;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let engine = DetectionEngine::with_defaults()?;
//! let detector = HttpDetector::new(&RemoteConfig::default())?;
//!
//! let result = engine.detect_hybrid("Call me at 555-123-4567", &detector).await;
//! println!("{:?}", result.provenance);
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch statistics
//!
//! ```rust
//! use veil::detection::{BatchStatistics, DetectionEngine};
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = DetectionEngine::with_defaults()?;
//! let results = engine.detect_batch(["Call 555-123-4567", "hello"]);
//! let stats = BatchStatistics::from_results(&results);
//!
//! assert_eq!(stats.total_messages, 2);
//! assert_eq!(stats.messages_with_pii, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! The library surface uses [`domain::VeilError`]. Detection itself never
//! fails: empty input, clean text, and remote outages all produce a
//! [`detection::DetectionResult`].
//!
//! ## Logging
//!
//! Veil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting batch detection");
//! warn!(reason = "timeout", "Remote detector unavailable, degraded mode");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod logging;
pub mod remote;
