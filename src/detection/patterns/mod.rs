//! Pattern library for PII detection

use crate::detection::models::PiiCategory;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Regex patterns for this category, ordered by specificity
    pub patterns: Vec<String>,
    /// Base confidence score (0.0 - 1.0) before scorer adjustments
    pub confidence: f32,
    /// PII category label
    pub category: String,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled regex
    pub regex: Regex,
    /// PII category
    pub category: PiiCategory,
    /// Base confidence score
    pub confidence: f32,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Pattern registry for PII detection
///
/// Read-only after construction; shared by reference across all detection
/// calls.
pub struct PatternRegistry {
    patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>>,
    total_patterns: usize,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut patterns_by_category: HashMap<PiiCategory, Vec<CompiledPattern>> = HashMap::new();
        let mut total_patterns = 0;

        for (name, def) in library.patterns {
            let category = PiiCategory::parse_label(&def.category).with_context(|| {
                format!("Unknown category in pattern '{}': {}", name, def.category)
            })?;

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in pattern '{name}': {pattern_str}"))?;

                patterns_by_category
                    .entry(category)
                    .or_default()
                    .push(CompiledPattern {
                        regex,
                        category,
                        confidence: def.confidence,
                    });
                total_patterns += 1;
            }
        }

        Ok(Self {
            patterns_by_category,
            total_patterns,
        })
    }

    /// Create a registry with the built-in default patterns
    pub fn default_patterns() -> Result<Self> {
        let default_toml = include_str!("../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// Total number of compiled patterns across all categories
    pub fn len(&self) -> usize {
        self.total_patterns
    }

    /// True when the registry holds no patterns
    pub fn is_empty(&self) -> bool {
        self.total_patterns == 0
    }

    /// Get patterns for a specific category
    pub fn patterns_for_category(&self, category: PiiCategory) -> Option<&[CompiledPattern]> {
        self.patterns_by_category
            .get(&category)
            .map(|v| v.as_slice())
    }
}
