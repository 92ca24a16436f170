//! Configuration for readability analysis.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::difficulty::{DEFAULT_HARD_THRESHOLD, DEFAULT_VERY_HARD_THRESHOLD};
use crate::error::{LegibleError, Result};

/// Grade level recommended for text aimed at a broad audience.
pub const DEFAULT_TARGET_GRADE: f64 = 8.0;

/// Configuration for [`ReadabilityAnalyzer`](super::analyzer::ReadabilityAnalyzer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityConfig {
    /// Minimum word count for a sentence to be labelled hard.
    pub hard_threshold: usize,

    /// Minimum word count for a sentence to be labelled very hard.
    pub very_hard_threshold: usize,

    /// Grade level at or below which text counts as readable.
    pub target_grade: f64,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        ReadabilityConfig {
            hard_threshold: DEFAULT_HARD_THRESHOLD,
            very_hard_threshold: DEFAULT_VERY_HARD_THRESHOLD,
            target_grade: DEFAULT_TARGET_GRADE,
        }
    }
}

impl ReadabilityConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hard sentence threshold.
    pub fn hard_threshold(mut self, hard_threshold: usize) -> Self {
        self.hard_threshold = hard_threshold;
        self
    }

    /// Set the very hard sentence threshold.
    pub fn very_hard_threshold(mut self, very_hard_threshold: usize) -> Self {
        self.very_hard_threshold = very_hard_threshold;
        self
    }

    /// Set the target grade level.
    pub fn target_grade(mut self, target_grade: f64) -> Self {
        self.target_grade = target_grade;
        self
    }

    /// Check that the thresholds are ordered and the target is usable.
    pub fn validate(&self) -> Result<()> {
        if self.hard_threshold == 0 {
            return Err(LegibleError::config("hard_threshold must be greater than 0"));
        }
        if self.very_hard_threshold <= self.hard_threshold {
            return Err(LegibleError::config(format!(
                "very_hard_threshold ({}) must be greater than hard_threshold ({})",
                self.very_hard_threshold, self.hard_threshold
            )));
        }
        if !self.target_grade.is_finite() {
            return Err(LegibleError::config("target_grade must be a finite number"));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ReadabilityConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded readability config from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }
}
