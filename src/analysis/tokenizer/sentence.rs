//! Sentence tokenizer implementation.
//!
//! A sentence is a maximal run of non-terminator characters followed by a
//! maximal run of terminators (`.`, `!`, `?`). The tokenizer runs in one of
//! two modes:
//!
//! - **sentences** (the default): emits only terminated sentences of the
//!   trimmed text, falling back to the whole trimmed text when no sentence
//!   is terminated. This is the count the grade-level formula uses.
//! - **segments**: emits every chunk of the untrimmed text, terminated
//!   sentences and the fragments around them, so that concatenating the
//!   tokens reproduces the input exactly. Highlighting uses this mode.
//!
//! Abbreviations such as "Mr." end a sentence; this is an accepted
//! limitation of the heuristic.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{LegibleError, Result};

/// Pattern matching one terminated sentence.
pub const SENTENCE_PATTERN: &str = r"[^.!?]+[.!?]+";

static DEFAULT_SENTENCE_REGEX: LazyLock<Arc<Regex>> = LazyLock::new(|| {
    Arc::new(Regex::new(SENTENCE_PATTERN).expect("sentence pattern should be valid"))
});

/// A regex-based tokenizer that extracts sentences.
#[derive(Clone, Debug)]
pub struct SentenceTokenizer {
    /// The regex pattern matching one terminated sentence
    pattern: Arc<Regex>,
    /// Whether to emit the fragments between sentences as well
    segments: bool,
}

impl SentenceTokenizer {
    /// Create a sentence tokenizer in counting mode.
    pub fn new() -> Self {
        SentenceTokenizer {
            pattern: Arc::clone(&DEFAULT_SENTENCE_REGEX),
            segments: false,
        }
    }

    /// Create a lossless tokenizer that also emits the fragments between sentences.
    pub fn segmenting() -> Self {
        SentenceTokenizer {
            pattern: Arc::clone(&DEFAULT_SENTENCE_REGEX),
            segments: true,
        }
    }

    /// Create a counting-mode tokenizer with a custom sentence pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LegibleError::analysis(format!("Invalid sentence pattern: {e}")))?;

        Ok(SentenceTokenizer {
            pattern: Arc::new(regex),
            segments: false,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer emits fragments between sentences.
    pub fn segments(&self) -> bool {
        self.segments
    }

    fn tokenize_sentences(&self, text: &str) -> Vec<Token> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let lead = text.len() - text.trim_start().len();

        let mut tokens: Vec<Token> = self
            .pattern
            .find_iter(trimmed)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(
                    mat.as_str(),
                    position,
                    lead + mat.start(),
                    lead + mat.end(),
                )
                .with_token_type(TokenType::Sentence)
            })
            .collect();

        // Unterminated text still reads as one sentence.
        if tokens.is_empty() {
            tokens.push(
                Token::with_offsets(trimmed, 0, lead, lead + trimmed.len())
                    .with_token_type(TokenType::Sentence),
            );
        }

        tokens
    }

    fn tokenize_segments(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(
                    Token::with_offsets(
                        &text[last_end..mat.start()],
                        tokens.len(),
                        last_end,
                        mat.start(),
                    )
                    .with_token_type(TokenType::Fragment),
                );
            }
            tokens.push(
                Token::with_offsets(mat.as_str(), tokens.len(), mat.start(), mat.end())
                    .with_token_type(TokenType::Sentence),
            );
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(
                Token::with_offsets(&text[last_end..], tokens.len(), last_end, text.len())
                    .with_token_type(TokenType::Fragment),
            );
        }

        tokens
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens = if self.segments {
            self.tokenize_segments(text)
        } else {
            self.tokenize_sentences(text)
        };

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        if self.segments {
            "sentence_segments"
        } else {
            "sentence"
        }
    }
}
