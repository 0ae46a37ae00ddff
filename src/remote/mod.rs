//! Remote PII detection service integration
//!
//! The engine consumes an external detector over HTTP as a collaborator:
//! `POST /detect_pii` for text and `POST /api/process_voice` for voice
//! payloads. Every failure mode here (network, timeout, non-2xx, malformed
//! payload) is recoverable; the detection engine degrades to local-only
//! results instead of propagating it.

pub mod client;
pub mod models;

pub use client::{HttpDetector, RemoteDetector, DEFAULT_TIMEOUT_SECS};
pub use models::{RemoteDetection, RemoteDetectionDetail, VoiceDetection};
