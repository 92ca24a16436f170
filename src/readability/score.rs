//! Flesch-Kincaid Grade Level scoring.
//!
//! ```text
//! grade = 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
//! ```
//!
//! The score is rounded to one decimal place. Inputs with no words or no
//! sentences short-circuit to the zero result, so the score is always finite.

use serde::{Deserialize, Serialize};

const SENTENCE_LENGTH_WEIGHT: f64 = 0.39;
const WORD_LENGTH_WEIGHT: f64 = 11.8;
const GRADE_OFFSET: f64 = 15.59;

/// Counts and grade level derived from one text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of whitespace-delimited words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Total estimated syllables across all words.
    pub syllables: usize,
    /// Flesch-Kincaid grade level, rounded to one decimal.
    pub grade_level: f64,
}

impl AnalysisResult {
    /// The result for text with nothing to score.
    pub const ZERO: AnalysisResult = AnalysisResult {
        words: 0,
        sentences: 0,
        syllables: 0,
        grade_level: 0.0,
    };

    /// Build a result from raw counts, computing the grade level.
    ///
    /// Returns [`AnalysisResult::ZERO`] when `words` or `sentences` is zero.
    pub fn from_counts(words: usize, sentences: usize, syllables: usize) -> Self {
        if words == 0 || sentences == 0 {
            return Self::ZERO;
        }

        AnalysisResult {
            words,
            sentences,
            syllables,
            grade_level: grade_level(words, sentences, syllables),
        }
    }

    /// Check if this is the zero result.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Average words per sentence, or 0 for empty text.
    pub fn words_per_sentence(&self) -> f64 {
        if self.sentences == 0 {
            0.0
        } else {
            self.words as f64 / self.sentences as f64
        }
    }

    /// Average syllables per word, or 0 for empty text.
    pub fn syllables_per_word(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.syllables as f64 / self.words as f64
        }
    }
}

/// Compute the rounded Flesch-Kincaid grade level.
///
/// Returns 0.0 when `words` or `sentences` is zero.
pub fn grade_level(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }

    let words = words as f64;
    let raw = SENTENCE_LENGTH_WEIGHT * (words / sentences as f64)
        + WORD_LENGTH_WEIGHT * (syllables as f64 / words)
        - GRADE_OFFSET;

    round_to_tenth(raw)
}

/// Round to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula() {
        // 0.39 * 10 + 11.8 * 1.5 - 15.59 = 6.01
        assert_eq!(grade_level(20, 2, 30), 6.0);
        // 0.39 * 5 + 11.8 * 1.0 - 15.59 = -1.84
        assert_eq!(grade_level(5, 1, 5), -1.8);
        // 0.39 * 20 + 11.8 * 2.0 - 15.59 = 15.81
        assert_eq!(grade_level(20, 1, 40), 15.8);
    }

    #[test]
    fn test_zero_guard() {
        assert_eq!(grade_level(0, 0, 0), 0.0);
        assert_eq!(grade_level(0, 3, 4), 0.0);
        assert_eq!(grade_level(12, 0, 20), 0.0);
        assert_eq!(AnalysisResult::from_counts(12, 0, 20), AnalysisResult::ZERO);
        assert_eq!(AnalysisResult::from_counts(0, 1, 0), AnalysisResult::ZERO);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(-2.25), -2.3);
        assert_eq!(round_to_tenth(6.04), 6.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn test_from_counts() {
        let result = AnalysisResult::from_counts(20, 2, 30);
        assert_eq!(result.words, 20);
        assert_eq!(result.sentences, 2);
        assert_eq!(result.syllables, 30);
        assert_eq!(result.grade_level, 6.0);
        assert_eq!(result.words_per_sentence(), 10.0);
        assert_eq!(result.syllables_per_word(), 1.5);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_zero_result_averages() {
        let zero = AnalysisResult::default();
        assert_eq!(zero, AnalysisResult::ZERO);
        assert!(zero.is_empty());
        assert_eq!(zero.words_per_sentence(), 0.0);
        assert_eq!(zero.syllables_per_word(), 0.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(AnalysisResult::from_counts(20, 2, 30)).unwrap();
        assert_eq!(json["words"], 20);
        assert_eq!(json["grade_level"], 6.0);
    }
}
