//! Readability scoring.
//!
//! Computes the Flesch-Kincaid Grade Level of English text and labels each
//! sentence as normal, hard or very hard by its length. The free functions
//! in this module use a shared default [`ReadabilityAnalyzer`]; build your
//! own analyzer to change thresholds or the syllable counter.
//!
//! # Examples
//!
//! ```
//! use legible::readability::{analyze, classify_sentences, Difficulty};
//!
//! let result = analyze("Short words help. So do short sentences.");
//! assert_eq!(result.words, 7);
//! assert_eq!(result.sentences, 2);
//!
//! let sentences = classify_sentences("Short words help.");
//! assert_eq!(sentences[0].difficulty, Difficulty::Normal);
//! ```

use std::sync::LazyLock;

pub mod analyzer;
pub mod config;
pub mod difficulty;
pub mod score;
pub mod syllable;

pub use analyzer::ReadabilityAnalyzer;
pub use config::ReadabilityConfig;
pub use difficulty::{ClassifiedSentence, Difficulty, DifficultyClassifier};
pub use score::AnalysisResult;
pub use syllable::{HeuristicSyllableCounter, SyllableCounter};

use crate::analysis::token::Token;

/// Sample text for trying the analyzer out.
pub const SAMPLE_TEXT: &str = "Good writing is characterized by its simplicity and directness. \
Avoid complicated syntax and prefer short, declarative sentences. \
This approach to writing makes your prose both accessible and powerful. \
While some complex ideas require nuanced phrasing, aiming for clarity is never a bad goal. \
The influence of clear writing on modern communication is undeniable and profoundly significant.";

static DEFAULT_ANALYZER: LazyLock<ReadabilityAnalyzer> = LazyLock::new(ReadabilityAnalyzer::new);

/// Analyze text with the default analyzer.
pub fn analyze(text: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text)
}

/// Classify the sentences of text with the default analyzer.
pub fn classify_sentences(text: &str) -> Vec<ClassifiedSentence> {
    DEFAULT_ANALYZER.classify_sentences(text)
}

/// Split text into words.
pub fn words_of(text: &str) -> Vec<Token> {
    DEFAULT_ANALYZER.words_of(text)
}

/// Split text into the sentences the grade-level formula counts.
pub fn sentences_of(text: &str) -> Vec<Token> {
    DEFAULT_ANALYZER.sentences_of(text)
}

/// Estimate the syllables of a single word with the heuristic counter.
pub fn count_syllables(word: &str) -> usize {
    DEFAULT_ANALYZER.count_syllables(word)
}
