//! Integration tests for hybrid detection and degraded-mode fallback

use async_trait::async_trait;
use std::time::Duration;
use veil::config::RemoteConfig;
use veil::detection::{DetectionEngine, MatchSource, PiiCategory, Provenance};
use veil::domain::Result;
use veil::remote::{HttpDetector, RemoteDetection, RemoteDetector, VoiceDetection};

const TEXT: &str = "Call me at 555-123-4567 near 12 Oak Hollow";

fn engine() -> DetectionEngine {
    DetectionEngine::with_defaults().expect("default engine")
}

fn remote_config(base_url: &str) -> RemoteConfig {
    RemoteConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        ..Default::default()
    }
}

/// Remote response: phone span overlapping the local phone match, plus an
/// address the local patterns cannot see ("Hollow" is not a street suffix)
fn merged_response_body() -> String {
    serde_json::json!({
        "hasRedactions": true,
        "redactedContent": "Call me at [PHONE REDACTED] near [ADDRESS REDACTED]",
        "detectedFields": ["PHONE", "LOCATION"],
        "detectionDetails": [
            {"type": "PHONE", "original": "555-123-4567", "confidence": 0.97, "position": [11, 23]},
            {"type": "LOCATION", "original": "12 Oak Hollow", "confidence": 0.88, "position": [29, 42]}
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_hybrid_merges_remote_and_local() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/detect_pii")
        .with_status(200)
        .with_body(merged_response_body())
        .create_async()
        .await;

    let detector = HttpDetector::new(&remote_config(&server.url())).unwrap();
    let result = engine().detect_hybrid(TEXT, &detector).await;

    assert_eq!(result.provenance, Provenance::Hybrid);
    assert!(result.categories.contains(&PiiCategory::PhoneNumber));
    assert!(result.categories.contains(&PiiCategory::Address));
    assert_eq!(
        result.redacted_text,
        "Call me at [PHONE REDACTED] near [ADDRESS REDACTED]"
    );

    // Remote precedence: the phone span reflects the remote match
    let phone = result
        .matches
        .iter()
        .find(|m| m.category == PiiCategory::PhoneNumber)
        .unwrap();
    assert_eq!(phone.source, MatchSource::Remote);
    assert!((phone.confidence - 0.97).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_remote_server_error_degrades_to_local() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/detect_pii")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let detector = HttpDetector::new(&remote_config(&server.url())).unwrap();
    let result = engine().detect_hybrid(TEXT, &detector).await;

    assert_eq!(result.provenance, Provenance::Degraded);
    // Local coverage only: the phone is still redacted, the address is not
    assert_eq!(
        result.categories.iter().copied().collect::<Vec<_>>(),
        vec![PiiCategory::PhoneNumber]
    );
    assert_eq!(
        result.redacted_text,
        "Call me at [PHONE REDACTED] near 12 Oak Hollow"
    );
    assert!(result.matches.iter().all(|m| m.source == MatchSource::Local));
}

#[tokio::test]
async fn test_remote_malformed_payload_degrades_to_local() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/detect_pii")
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;

    let detector = HttpDetector::new(&remote_config(&server.url())).unwrap();
    let result = engine().detect_hybrid(TEXT, &detector).await;

    assert_eq!(result.provenance, Provenance::Degraded);
    assert!(result.has_redactions);
}

#[tokio::test]
async fn test_remote_connection_failure_degrades_to_local() {
    // Nothing is listening on this port
    let detector = HttpDetector::new(&remote_config("http://127.0.0.1:1")).unwrap();
    let result = engine().detect_hybrid(TEXT, &detector).await;

    assert_eq!(result.provenance, Provenance::Degraded);
    assert_eq!(
        result.redacted_text,
        "Call me at [PHONE REDACTED] near 12 Oak Hollow"
    );
}

/// Detector that never answers inside its own deadline
struct StalledDetector;

#[async_trait]
impl RemoteDetector for StalledDetector {
    async fn detect_text(&self, _text: &str) -> Result<RemoteDetection> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(RemoteDetection::default())
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(50)
    }
}

#[tokio::test]
async fn test_remote_timeout_degrades_to_local() {
    let result = engine().detect_hybrid(TEXT, &StalledDetector).await;

    assert_eq!(result.provenance, Provenance::Degraded);
    assert!(result.has_redactions);
    assert!(result.matches.iter().all(|m| m.source == MatchSource::Local));
}

#[tokio::test]
async fn test_remote_matches_pass_the_same_threshold() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/detect_pii")
        .with_status(200)
        .with_body(
            serde_json::json!({
                "hasRedactions": true,
                "redactedContent": "",
                "detectionDetails": [
                    {"type": "LOCATION", "original": "12 Oak Hollow", "confidence": 0.5, "position": [29, 42]}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let detector = HttpDetector::new(&remote_config(&server.url())).unwrap();
    let result = engine().detect_hybrid(TEXT, &detector).await;

    // 0.5 is below the acceptance threshold even with remote precedence
    assert_eq!(result.provenance, Provenance::Hybrid);
    assert!(!result.categories.contains(&PiiCategory::Address));
}

#[test]
fn test_transcript_with_embedded_payload_merges_like_hybrid() {
    let voice: VoiceDetection = serde_json::from_str(&format!(
        r#"{{
            "transcribed_text": "{TEXT}",
            "piiDetection": {}
        }}"#,
        merged_response_body()
    ))
    .unwrap();

    let result = engine().detect_transcript(
        &voice.transcribed_text,
        voice.pii_detection.as_ref(),
    );

    assert_eq!(result.provenance, Provenance::Hybrid);
    assert!(result.categories.contains(&PiiCategory::Address));
    assert_eq!(
        result.redacted_text,
        "Call me at [PHONE REDACTED] near [ADDRESS REDACTED]"
    );
}

#[test]
fn test_transcript_without_payload_is_local_only() {
    let result = engine().detect_transcript(TEXT, None);
    assert_eq!(result.provenance, Provenance::Local);
    assert!(result.categories.contains(&PiiCategory::PhoneNumber));
}

#[tokio::test]
async fn test_batch_hybrid_preserves_input_order() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/detect_pii")
        .with_status(200)
        .with_body(r#"{"hasRedactions":false,"redactedContent":"","detectionDetails":[]}"#)
        .expect_at_least(3)
        .create_async()
        .await;

    let detector = HttpDetector::new(&remote_config(&server.url())).unwrap();
    let messages = ["first 555-123-4567", "second clean", "third a@b.com"];
    let results = engine()
        .detect_batch_hybrid(messages.iter().copied(), &detector, 2)
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].original_text, messages[0]);
    assert_eq!(results[1].original_text, messages[1]);
    assert_eq!(results[2].original_text, messages[2]);
    assert!(results[0].has_redactions);
    assert!(!results[1].has_redactions);
    assert!(results[2].has_redactions);
}
