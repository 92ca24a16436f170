//! # Legible
//!
//! Readability scoring for English text.
//!
//! ## Features
//!
//! - Flesch-Kincaid Grade Level with a heuristic syllable counter
//! - Per-sentence difficulty labels for highlighting
//! - Offset-carrying word and sentence tokenizers
//! - A document model that keeps its analysis in sync with its text
//! - A pluggable interface for external rewrite services
//!
//! ```
//! let result = legible::readability::analyze("Clear writing wins.");
//! assert_eq!(result.words, 3);
//! assert_eq!(result.sentences, 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod document;
pub mod error;
pub mod readability;
pub mod rewrite;

pub mod prelude {
    pub use crate::document::Document;
    pub use crate::error::{LegibleError, Result};
    pub use crate::readability::{
        AnalysisResult, ClassifiedSentence, Difficulty, ReadabilityAnalyzer, ReadabilityConfig,
        analyze, classify_sentences,
    };
    pub use crate::rewrite::Rewriter;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
