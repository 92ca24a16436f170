//! Text analysis module for Legible.
//!
//! This module provides tokenization: splitting raw text into the words and
//! sentences that readability scoring counts.

pub mod token;
pub mod tokenizer;

pub use token::*;
pub use tokenizer::*;
