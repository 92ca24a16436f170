//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream, TokenType};

/// A tokenizer that splits text on runs of whitespace.
///
/// Every maximal run of non-whitespace characters becomes one word token;
/// leading, trailing and repeated whitespace never produce empty tokens.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Count the words in `text` without materializing tokens.
    pub fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), word_start) {
                (true, Some(start)) => {
                    tokens.push(word_token(text, tokens.len(), start, offset));
                    word_start = None;
                }
                (false, None) => word_start = Some(offset),
                _ => {}
            }
        }

        if let Some(start) = word_start {
            tokens.push(word_token(text, tokens.len(), start, text.len()));
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

fn word_token(text: &str, position: usize, start: usize, end: usize) -> Token {
    Token::with_offsets(&text[start..end], position, start, end).with_token_type(TokenType::Word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  the cat\n sat ";
        let tokens: Vec<Token> = WhitespaceTokenizer::new().tokenize(text).collect();

        assert_eq!(tokens.len(), 3);
        for token in &tokens {
            assert_eq!(&text[token.start_offset..token.end_offset], token.text);
        }
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_repeated_words_get_their_own_offsets() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new().tokenize("no no no").collect();
        let starts: Vec<usize> = tokens.iter().map(|t| t.start_offset).collect();
        assert_eq!(starts, vec![0, 3, 6]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize(" \n\t ").count(), 0);
        assert_eq!(tokenizer.count("   "), 0);
    }

    #[test]
    fn test_non_ascii_words() {
        let tokens: Vec<Token> = WhitespaceTokenizer::new().tokenize("café naïve résumé").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "naïve");
        assert_eq!(WhitespaceTokenizer::new().count("café naïve résumé"), 3);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
