//! Scan command implementation
//!
//! Detects and redacts PII in a single message, local-only or hybrid.

use super::load_config_or_default;
use crate::detection::{DetectionEngine, DetectionResult};
use crate::remote::HttpDetector;
use clap::Args;
use std::fs;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Message text to scan
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the message from a file instead
    #[arg(short, long)]
    pub file: Option<String>,

    /// Reconcile with the configured remote detector
    #[arg(long)]
    pub hybrid: bool,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let text = match (&self.text, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => {
                eprintln!("Error: provide a message or --file to scan");
                return Ok(2);
            }
        };

        let config = load_config_or_default(config_path)?;
        let engine = DetectionEngine::new(config.detection.clone())?;

        let result = if self.hybrid {
            let Some(remote_config) = config.remote.as_ref().filter(|r| r.enabled) else {
                eprintln!("Error: --hybrid requires an enabled [remote] section in {config_path}");
                return Ok(2);
            };
            let detector = HttpDetector::new(remote_config)?;
            engine.detect_hybrid(&text, &detector).await
        } else {
            engine.detect(&text)
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(&result);
        }

        Ok(0)
    }
}

fn print_result(result: &DetectionResult) {
    println!("{}", result.redacted_text);

    if result.has_redactions {
        println!();
        println!(
            "  {} match(es), provenance: {:?}",
            result.matches.len(),
            result.provenance
        );
        for m in &result.matches {
            println!(
                "  {:12} {:>4.0}%  [{}..{}]  {:?}",
                m.category.label(),
                m.confidence * 100.0,
                m.start,
                m.end,
                m.source
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_local() {
        let args = ScanArgs {
            text: Some("Call me at 555-123-4567".to_string()),
            file: None,
            hybrid: false,
            json: false,
        };
        let code = args.execute("nonexistent-veil.toml").await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_scan_without_input_is_config_error() {
        let args = ScanArgs {
            text: None,
            file: None,
            hybrid: false,
            json: false,
        };
        let code = args.execute("nonexistent-veil.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_scan_hybrid_without_remote_config_is_config_error() {
        let args = ScanArgs {
            text: Some("hello".to_string()),
            file: None,
            hybrid: true,
            json: false,
        };
        let code = args.execute("nonexistent-veil.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
