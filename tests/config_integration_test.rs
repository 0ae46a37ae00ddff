//! Integration tests for configuration loading

use secrecy::ExposeSecret;
use std::io::Write;
use tempfile::NamedTempFile;
use veil::config::load_config;
use veil::detection::DetectionEngine;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_config_round_trip() {
    let file = write_config(
        r#"
[application]
log_level = "debug"

[detection]
confidence_threshold = 0.7

[detection.audit]
enabled = false

[remote]
base_url = "http://detector.internal:5000"
enabled = true
timeout_seconds = 5

[logging]
local_enabled = false
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.detection.confidence_threshold, 0.7);

    let remote = config.remote.as_ref().unwrap();
    assert_eq!(remote.base_url, "http://detector.internal:5000");
    assert_eq!(remote.timeout_seconds, 5);

    // The loaded detection section must build a working engine
    let engine = DetectionEngine::new(config.detection.clone()).unwrap();
    assert!(engine.detect("call 555-123-4567").has_redactions);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let file = write_config("");

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.detection.confidence_threshold, 0.7);
    assert!(config.remote.is_none());
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution_in_api_key() {
    std::env::set_var("VEIL_IT_REMOTE_KEY", "sk-test-123");
    let file = write_config(
        r#"
[remote]
base_url = "http://localhost:5000"
api_key = "${VEIL_IT_REMOTE_KEY}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    let key = config.remote.unwrap().api_key.unwrap();
    assert_eq!(key.expose_secret().as_ref(), "sk-test-123");

    std::env::remove_var("VEIL_IT_REMOTE_KEY");
}

#[test]
fn test_missing_env_var_fails_load() {
    std::env::remove_var("VEIL_IT_MISSING_KEY");
    let file = write_config(
        r#"
[remote]
base_url = "http://localhost:5000"
api_key = "${VEIL_IT_MISSING_KEY}"
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_invalid_remote_url_fails_validation() {
    let file = write_config(
        r#"
[remote]
base_url = "not a url at all"
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_out_of_range_threshold_fails_validation() {
    let file = write_config(
        r#"
[detection]
confidence_threshold = 1.5
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_custom_pattern_library_path() {
    let mut patterns = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    patterns
        .write_all(
            br#"
[patterns.email]
category = "EMAIL"
confidence = 0.8
patterns = ['\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b']
"#,
        )
        .unwrap();
    patterns.flush().unwrap();

    let file = write_config(&format!(
        "[detection]\npattern_library = \"{}\"\n",
        patterns.path().display()
    ));

    let config = load_config(file.path()).unwrap();
    let engine = DetectionEngine::new(config.detection).unwrap();

    // Only the email category is loaded from the custom library
    assert!(engine.detect("mail a@b.com").has_redactions);
    assert!(!engine.detect("call 555-123-4567").has_redactions);
}
