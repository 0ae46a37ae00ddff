//! Batch command implementation
//!
//! Runs detection across a file of messages (one per line) and prints the
//! batch statistics report.

use super::load_config_or_default;
use crate::detection::{BatchStatistics, DetectionEngine, DetectionResult};
use crate::remote::HttpDetector;
use clap::Args;
use std::fs;
use tokio::sync::watch;

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input file, one message per line
    #[arg(short, long)]
    pub input: String,

    /// Reconcile each message with the configured remote detector
    #[arg(long)]
    pub hybrid: bool,

    /// Concurrent remote calls in hybrid mode
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl BatchArgs {
    /// Execute the batch command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let contents = fs::read_to_string(&self.input)?;
        let messages: Vec<&str> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        tracing::info!(
            input = %self.input,
            messages = messages.len(),
            hybrid = self.hybrid,
            "Starting batch detection"
        );

        let config = load_config_or_default(config_path)?;
        let engine = DetectionEngine::new(config.detection.clone())?;

        let results = if self.hybrid {
            let Some(remote_config) = config.remote.as_ref().filter(|r| r.enabled) else {
                eprintln!("Error: --hybrid requires an enabled [remote] section in {config_path}");
                return Ok(2);
            };
            let detector = HttpDetector::new(remote_config)?;
            self.run_hybrid(&engine, &detector, &messages, shutdown).await
        } else {
            self.run_local(&engine, &messages, shutdown)
        };

        let stats = BatchStatistics::from_results(&results);

        if self.json {
            println!("{}", stats.format_json()?);
        } else {
            println!("{}", stats.format_console());
        }

        Ok(0)
    }

    fn run_local(
        &self,
        engine: &DetectionEngine,
        messages: &[&str],
        shutdown: watch::Receiver<bool>,
    ) -> Vec<DetectionResult> {
        let mut results = Vec::with_capacity(messages.len());
        for message in messages {
            if *shutdown.borrow() {
                tracing::info!(
                    processed = results.len(),
                    total = messages.len(),
                    "Shutdown requested, stopping batch early"
                );
                break;
            }
            results.push(engine.detect(message));
        }
        results
    }

    async fn run_hybrid(
        &self,
        engine: &DetectionEngine,
        detector: &HttpDetector,
        messages: &[&str],
        shutdown: watch::Receiver<bool>,
    ) -> Vec<DetectionResult> {
        let mut results = Vec::with_capacity(messages.len());
        // Fan out one concurrency window at a time so a shutdown signal is
        // honored between windows
        for chunk in messages.chunks(self.concurrency.max(1)) {
            if *shutdown.borrow() {
                tracing::info!(
                    processed = results.len(),
                    total = messages.len(),
                    "Shutdown requested, stopping batch early"
                );
                break;
            }
            results.extend(
                engine
                    .detect_batch_hybrid(chunk.iter().copied(), detector, self.concurrency)
                    .await,
            );
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn shutdown_rx() -> watch::Receiver<bool> {
        let (_tx, rx) = watch::channel(false);
        // Keep the sender alive by leaking it; fine for tests
        std::mem::forget(_tx);
        rx
    }

    #[tokio::test]
    async fn test_batch_local() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "Call me at 555-123-4567").unwrap();
        writeln!(input).unwrap();
        writeln!(input, "no pii here").unwrap();
        input.flush().unwrap();

        let args = BatchArgs {
            input: input.path().to_string_lossy().to_string(),
            hybrid: false,
            concurrency: 8,
            json: true,
        };
        let code = args
            .execute("nonexistent-veil.toml", shutdown_rx())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_batch_missing_input_errors() {
        let args = BatchArgs {
            input: "/nonexistent/messages.txt".to_string(),
            hybrid: false,
            concurrency: 8,
            json: false,
        };
        assert!(args
            .execute("nonexistent-veil.toml", shutdown_rx())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_batch_respects_shutdown() {
        let mut input = NamedTempFile::new().unwrap();
        for _ in 0..100 {
            writeln!(input, "Call me at 555-123-4567").unwrap();
        }
        input.flush().unwrap();

        let (tx, rx) = watch::channel(true);
        let args = BatchArgs {
            input: input.path().to_string_lossy().to_string(),
            hybrid: false,
            concurrency: 8,
            json: true,
        };
        let code = args.execute("nonexistent-veil.toml", rx).await.unwrap();
        drop(tx);
        assert_eq!(code, 0);
    }
}
