//! Sentence difficulty classification for highlighting.
//!
//! Each sentence is labelled purely by its word count. The label is a
//! display hint; it plays no part in the grade-level formula.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default word count at which a sentence becomes hard to read.
pub const DEFAULT_HARD_THRESHOLD: usize = 15;

/// Default word count at which a sentence becomes very hard to read.
pub const DEFAULT_VERY_HARD_THRESHOLD: usize = 20;

/// Three-level difficulty label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "hard")]
    Hard,
    #[serde(rename = "very hard")]
    VeryHard,
}

impl Difficulty {
    /// Display name used in reports and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very hard",
        }
    }

    /// Whether a shell should draw attention to this sentence.
    pub fn is_flagged(&self) -> bool {
        *self != Difficulty::Normal
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a sentence word count onto a [`Difficulty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyClassifier {
    hard_threshold: usize,
    very_hard_threshold: usize,
}

impl DifficultyClassifier {
    /// Create a classifier with explicit thresholds.
    ///
    /// Thresholds are inclusive lower bounds; callers validate their ordering
    /// through [`ReadabilityConfig::validate`](super::config::ReadabilityConfig::validate).
    pub fn new(hard_threshold: usize, very_hard_threshold: usize) -> Self {
        DifficultyClassifier {
            hard_threshold,
            very_hard_threshold,
        }
    }

    /// Classify a sentence by its word count.
    pub fn classify(&self, word_count: usize) -> Difficulty {
        if word_count >= self.very_hard_threshold {
            Difficulty::VeryHard
        } else if word_count >= self.hard_threshold {
            Difficulty::Hard
        } else {
            Difficulty::Normal
        }
    }

    pub fn hard_threshold(&self) -> usize {
        self.hard_threshold
    }

    pub fn very_hard_threshold(&self) -> usize {
        self.very_hard_threshold
    }
}

impl Default for DifficultyClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_HARD_THRESHOLD, DEFAULT_VERY_HARD_THRESHOLD)
    }
}

/// One chunk of the input text with its difficulty label.
///
/// Chunks are produced in document order and concatenate back to the
/// original text, so a shell can re-render each one in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSentence {
    /// The chunk text, terminators and surrounding whitespace included.
    pub text: String,
    /// Difficulty label derived from `word_count`.
    pub difficulty: Difficulty,
    /// Number of words in the chunk.
    pub word_count: usize,
    /// Byte offset of the chunk start in the analyzed text.
    pub start_offset: usize,
    /// Byte offset of the chunk end in the analyzed text.
    pub end_offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let classifier = DifficultyClassifier::default();
        assert_eq!(classifier.classify(0), Difficulty::Normal);
        assert_eq!(classifier.classify(14), Difficulty::Normal);
        assert_eq!(classifier.classify(15), Difficulty::Hard);
        assert_eq!(classifier.classify(19), Difficulty::Hard);
        assert_eq!(classifier.classify(20), Difficulty::VeryHard);
        assert_eq!(classifier.classify(200), Difficulty::VeryHard);
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = DifficultyClassifier::new(5, 8);
        assert_eq!(classifier.classify(4), Difficulty::Normal);
        assert_eq!(classifier.classify(5), Difficulty::Hard);
        assert_eq!(classifier.classify(8), Difficulty::VeryHard);
        assert_eq!(classifier.hard_threshold(), 5);
        assert_eq!(classifier.very_hard_threshold(), 8);
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::VeryHard.to_string(), "very hard");
        assert_eq!(
            serde_json::to_string(&Difficulty::VeryHard).unwrap(),
            "\"very hard\""
        );
        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
        assert!(Difficulty::Hard.is_flagged());
        assert!(!Difficulty::Normal.is_flagged());
        assert!(Difficulty::Normal < Difficulty::VeryHard);
    }
}
