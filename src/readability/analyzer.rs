//! The readability analyzer.
//!
//! [`ReadabilityAnalyzer`] combines the tokenizers, a syllable counter and a
//! difficulty classifier:
//!
//! ```text
//! Raw Text ─┬─ WhitespaceTokenizer ──→ words ──→ SyllableCounter ─┐
//!           ├─ SentenceTokenizer ────→ sentences ─────────────────┼─→ AnalysisResult
//!           └─ SentenceTokenizer (segments) ─→ DifficultyClassifier ─→ ClassifiedSentence*
//! ```
//!
//! Every operation is a pure function of its input: the analyzer holds no
//! mutable state and can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use legible::readability::analyzer::ReadabilityAnalyzer;
//!
//! let analyzer = ReadabilityAnalyzer::new();
//! let result = analyzer.analyze("The cat sat on the mat.");
//!
//! assert_eq!(result.words, 6);
//! assert_eq!(result.sentences, 1);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use super::config::ReadabilityConfig;
use super::difficulty::{ClassifiedSentence, DifficultyClassifier};
use super::score::AnalysisResult;
use super::syllable::{HeuristicSyllableCounter, SyllableCounter};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{SentenceTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Scores text with the Flesch-Kincaid Grade Level and labels its sentences.
#[derive(Clone)]
pub struct ReadabilityAnalyzer {
    config: ReadabilityConfig,
    words: WhitespaceTokenizer,
    sentences: SentenceTokenizer,
    segments: SentenceTokenizer,
    syllables: Arc<dyn SyllableCounter>,
    classifier: DifficultyClassifier,
}

impl ReadabilityAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        let config = ReadabilityConfig::default();
        let classifier =
            DifficultyClassifier::new(config.hard_threshold, config.very_hard_threshold);

        ReadabilityAnalyzer {
            config,
            words: WhitespaceTokenizer::new(),
            sentences: SentenceTokenizer::new(),
            segments: SentenceTokenizer::segmenting(),
            syllables: Arc::new(HeuristicSyllableCounter::new()),
            classifier,
        }
    }

    /// Create an analyzer from a validated configuration.
    pub fn with_config(config: ReadabilityConfig) -> Result<Self> {
        config.validate()?;
        let classifier =
            DifficultyClassifier::new(config.hard_threshold, config.very_hard_threshold);

        Ok(ReadabilityAnalyzer {
            config,
            classifier,
            ..Self::new()
        })
    }

    /// Replace the syllable counter.
    pub fn with_syllable_counter(mut self, syllables: Arc<dyn SyllableCounter>) -> Self {
        self.syllables = syllables;
        self
    }

    /// Get the configuration used by this analyzer.
    pub fn config(&self) -> &ReadabilityConfig {
        &self.config
    }

    /// Split text into words in document order.
    pub fn words_of(&self, text: &str) -> Vec<Token> {
        self.words.tokenize(text).collect()
    }

    /// Split text into the sentences the grade-level formula counts.
    pub fn sentences_of(&self, text: &str) -> Vec<Token> {
        self.sentences.tokenize(text).collect()
    }

    /// Split text into consecutive chunks that concatenate back to `text`.
    pub fn segments_of(&self, text: &str) -> Vec<Token> {
        self.segments.tokenize(text).collect()
    }

    /// Estimate the syllables of a single word.
    pub fn count_syllables(&self, word: &str) -> usize {
        self.syllables.count(word)
    }

    /// Count words, sentences and syllables and compute the grade level.
    ///
    /// Empty or whitespace-only text yields [`AnalysisResult::ZERO`].
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::ZERO;
        }

        let words = self.words_of(text);
        let syllables: usize = words.iter().map(|w| self.syllables.count(&w.text)).sum();
        let sentences = self.sentences.tokenize(text).count();

        let result = AnalysisResult::from_counts(words.len(), sentences, syllables);
        log::debug!(
            "analyzed {} words, {} sentences, {} syllables: grade {}",
            result.words,
            result.sentences,
            result.syllables,
            result.grade_level
        );
        result
    }

    /// Analyze several independent texts in parallel, preserving input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        texts.par_iter().map(|text| self.analyze(text.as_ref())).collect()
    }

    /// Label every chunk of `text` by its word count.
    ///
    /// Chunks keep their terminators and surrounding whitespace, so joining
    /// the returned texts reproduces `text`. Whitespace-only text yields no
    /// chunks.
    pub fn classify_sentences(&self, text: &str) -> Vec<ClassifiedSentence> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        self.segments
            .tokenize(text)
            .map(|segment| {
                let word_count = self.words.count(&segment.text);
                ClassifiedSentence {
                    difficulty: self.classifier.classify(word_count),
                    word_count,
                    start_offset: segment.start_offset,
                    end_offset: segment.end_offset,
                    text: segment.text,
                }
            })
            .collect()
    }

    /// Whether a result is at or below the configured target grade.
    pub fn meets_target(&self, result: &AnalysisResult) -> bool {
        result.grade_level <= self.config.target_grade
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReadabilityAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadabilityAnalyzer")
            .field("config", &self.config)
            .field("words", &self.words.name())
            .field("sentences", &self.sentences.name())
            .field("syllables", &self.syllables.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readability::difficulty::Difficulty;

    struct OneSyllable;

    impl SyllableCounter for OneSyllable {
        fn count(&self, _word: &str) -> usize {
            1
        }

        fn name(&self) -> &'static str {
            "one"
        }
    }

    fn sentence_of(words: usize) -> String {
        let mut sentence = vec!["word"; words].join(" ");
        sentence.push('.');
        sentence
    }

    #[test]
    fn test_blank_text_is_zero() {
        let analyzer = ReadabilityAnalyzer::new();
        assert_eq!(analyzer.analyze(""), AnalysisResult::ZERO);
        assert_eq!(analyzer.analyze("   "), AnalysisResult::ZERO);
        assert_eq!(analyzer.analyze("\n\t"), AnalysisResult::ZERO);
    }

    #[test]
    fn test_simple_sentence() {
        let analyzer = ReadabilityAnalyzer::new();
        let result = analyzer.analyze("The cat sat.");

        assert_eq!(result.words, 3);
        assert_eq!(result.sentences, 1);
        assert_eq!(result.syllables, 3);
        // 0.39 * 3 + 11.8 * 1 - 15.59 = -2.62
        assert_eq!(result.grade_level, -2.6);
    }

    #[test]
    fn test_word_count_matches_tokenizer() {
        let analyzer = ReadabilityAnalyzer::new();
        for text in ["", "one", "  two  words ", "Three. Short! Lines?", "a\nb\tc  d"] {
            assert_eq!(analyzer.analyze(text).words, analyzer.words_of(text).len());
        }
    }

    #[test]
    fn test_single_word_is_one_sentence() {
        let analyzer = ReadabilityAnalyzer::new();
        for word in ["hello", "antidisestablishmentarianism", "x"] {
            assert_eq!(analyzer.analyze(word).sentences, 1);
        }
    }

    #[test]
    fn test_custom_syllable_counter() {
        let analyzer = ReadabilityAnalyzer::new().with_syllable_counter(Arc::new(OneSyllable));
        let result = analyzer.analyze("Extraordinary circumstances demand attention.");
        assert_eq!(result.syllables, 4);
        assert_eq!(analyzer.count_syllables("extraordinary"), 1);
    }

    #[test]
    fn test_classify_boundaries() {
        let analyzer = ReadabilityAnalyzer::new();
        let text = format!("{} {} {}", sentence_of(14), sentence_of(15), sentence_of(20));
        let classified = analyzer.classify_sentences(&text);

        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0].word_count, 14);
        assert_eq!(classified[0].difficulty, Difficulty::Normal);
        assert_eq!(classified[1].word_count, 15);
        assert_eq!(classified[1].difficulty, Difficulty::Hard);
        assert_eq!(classified[2].word_count, 20);
        assert_eq!(classified[2].difficulty, Difficulty::VeryHard);
    }

    #[test]
    fn test_classify_is_lossless() {
        let analyzer = ReadabilityAnalyzer::new();
        let text = "  First one. Second one!  And a tail without an end";
        let classified = analyzer.classify_sentences(text);

        let joined: String = classified.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
        for sentence in &classified {
            assert_eq!(&text[sentence.start_offset..sentence.end_offset], sentence.text);
        }
    }

    #[test]
    fn test_segments_align_with_classification() {
        let analyzer = ReadabilityAnalyzer::new();
        let text = "One. Two three! tail";
        let segments = analyzer.segments_of(text);
        let classified = analyzer.classify_sentences(text);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments.len(), classified.len());
        for (segment, sentence) in segments.iter().zip(&classified) {
            assert_eq!(segment.text, sentence.text);
        }
        assert_eq!(analyzer.sentences_of(text).len(), 2);
    }

    #[test]
    fn test_classify_blank_text() {
        let analyzer = ReadabilityAnalyzer::new();
        assert!(analyzer.classify_sentences("").is_empty());
        assert!(analyzer.classify_sentences("   ").is_empty());
    }

    #[test]
    fn test_with_config() {
        let config = ReadabilityConfig::new()
            .hard_threshold(2)
            .very_hard_threshold(3)
            .target_grade(0.0);
        let analyzer = ReadabilityAnalyzer::with_config(config).unwrap();

        let classified = analyzer.classify_sentences("One. Two words. Now three words.");
        let labels: Vec<Difficulty> = classified.iter().map(|s| s.difficulty).collect();
        assert_eq!(
            labels,
            vec![Difficulty::Normal, Difficulty::Hard, Difficulty::VeryHard]
        );

        let result = analyzer.analyze("The cat sat on the mat.");
        assert!(analyzer.meets_target(&result));
        assert!(!analyzer.meets_target(&AnalysisResult::from_counts(20, 1, 40)));
    }

    #[test]
    fn test_with_invalid_config() {
        let config = ReadabilityConfig::new().hard_threshold(9).very_hard_threshold(3);
        assert!(ReadabilityAnalyzer::with_config(config).is_err());
    }

    #[test]
    fn test_analyze_batch_preserves_order() {
        let analyzer = ReadabilityAnalyzer::new();
        let texts = vec!["", "One two.", "One. Two. Three.", "a b c d e f g h"];
        let batch = analyzer.analyze_batch(texts.as_slice());

        assert_eq!(batch.len(), texts.len());
        for (text, result) in texts.iter().zip(&batch) {
            assert_eq!(*result, analyzer.analyze(text));
        }
    }

    #[test]
    fn test_idempotent() {
        let analyzer = ReadabilityAnalyzer::new();
        let text = "Avoid complicated syntax and prefer short, declarative sentences.";
        let first = analyzer.analyze(text);
        let second = analyzer.analyze(text);
        assert_eq!(first, second);
        assert_eq!(first.grade_level.to_bits(), second.grade_level.to_bits());
    }
}
