//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of readability scoring: they split raw text
//! into the words and sentences that the grade-level formula counts.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on runs of whitespace
//! - [`sentence::SentenceTokenizer`] - Splits on `.`, `!`, `?` terminators
//!
//! # Examples
//!
//! ```
//! use legible::analysis::tokenizer::Tokenizer;
//! use legible::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization cannot fail: any string, including the empty string, has a
/// (possibly empty) token sequence. The trait requires `Send + Sync` so that
/// analyzers holding tokenizers can score independent texts in parallel.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use legible::analysis::token::{Token, TokenStream};
/// use legible::analysis::tokenizer::Tokenizer;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> TokenStream {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Box::new(tokens.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens in document order.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod sentence;
pub mod whitespace;

pub use sentence::SentenceTokenizer;
pub use whitespace::WhitespaceTokenizer;
