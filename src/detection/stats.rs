//! Batch statistics over detection results

use crate::detection::models::{DetectionResult, PiiCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary statistics for a batch of detection results
///
/// Always recomputed from a result set, never mutated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Total results in the batch
    pub total_messages: usize,

    /// Results with at least one redaction
    pub messages_with_pii: usize,

    /// Number of results containing each category
    pub per_category_counts: HashMap<PiiCategory, usize>,

    /// messages_with_pii / total_messages; 0 for an empty batch
    pub redaction_rate: f64,
}

impl BatchStatistics {
    /// Compute statistics for a sequence of detection results
    pub fn from_results(results: &[DetectionResult]) -> Self {
        let total_messages = results.len();
        let messages_with_pii = results.iter().filter(|r| r.has_redactions).count();

        let mut per_category_counts: HashMap<PiiCategory, usize> = HashMap::new();
        for result in results {
            for category in &result.categories {
                *per_category_counts.entry(*category).or_insert(0) += 1;
            }
        }

        let redaction_rate = if total_messages > 0 {
            messages_with_pii as f64 / total_messages as f64
        } else {
            0.0
        };

        Self {
            total_messages,
            messages_with_pii,
            per_category_counts,
            redaction_rate,
        }
    }

    /// Format the statistics for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                  PII DETECTION BATCH REPORT                   \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Total Messages Analyzed:  {}\n",
            self.total_messages
        ));
        output.push_str(&format!(
            "  Messages with PII:        {}\n",
            self.messages_with_pii
        ));
        output.push_str(&format!(
            "  Redaction Rate:           {:.1}%\n",
            self.redaction_rate * 100.0
        ));
        output.push('\n');

        if !self.per_category_counts.is_empty() {
            output.push_str("🔍 DETECTIONS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.per_category_counts.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (category, count) in categories {
                output.push_str(&format!("  {:30} {:>5}\n", category.label(), count));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output
    }

    /// Format the statistics as pretty-printed JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
