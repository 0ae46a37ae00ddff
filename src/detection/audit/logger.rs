//! Audit logger for detection calls

use crate::detection::models::{DetectionResult, PiiMatch};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Audit log entry for one detection call
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    detection_id: Uuid,
    provenance: String,
    match_count: usize,
    matches: Vec<AuditMatch>,
}

/// Audit match entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditMatch {
    category: String,
    source: String,
    confidence: f32,
    span: [usize; 2],
    /// SHA-256 hash of the matched text (never log plaintext PII)
    value_hash: String,
}

/// Append-only JSONL audit logger for detection calls
pub struct AuditLogger {
    log_path: PathBuf,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self { log_path, enabled })
    }

    /// Log a finished detection result
    pub fn log_detection(&self, result: &DetectionResult) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            detection_id: Uuid::new_v4(),
            provenance: format!("{:?}", result.provenance).to_lowercase(),
            match_count: result.matches.len(),
            matches: result.matches.iter().map(Self::audit_match).collect(),
        };

        self.write_entry(&entry)
    }

    fn audit_match(m: &PiiMatch) -> AuditMatch {
        AuditMatch {
            category: m.category.label().to_string(),
            source: format!("{:?}", m.source).to_lowercase(),
            confidence: m.confidence,
            span: [m.start, m.end],
            value_hash: hash_pii_value(&m.text),
        }
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        let json_line = serde_json::to_string(entry).context("Failed to serialize audit entry")?;
        writeln!(file, "{json_line}").context("Failed to write audit entry")?;

        Ok(())
    }
}

/// Hash a PII value using SHA-256
fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
