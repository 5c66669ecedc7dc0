//! Tokenizer implementations for text analysis.
//!
//! The tokenizer is the first step of the pipeline, responsible for
//! splitting raw text into word tokens. The default [`WordTokenizer`]
//! extracts maximal runs of word characters plus the typographic
//! apostrophe, so contractions like "don’t" survive as single tokens.
//!
//! # Examples
//!
//! ```
//! use bookworm::analysis::token::Token;
//! use bookworm::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<Token> = tokenizer.tokenize("It’s alive!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "It’s");
//! assert_eq!(tokens[1].text, "alive");
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{BookwormError, Result};

/// The default tokenization pattern.
///
/// Matches maximal runs of word characters plus the typographic apostrophe
/// (U+2019), the quote Project Gutenberg texts use for contractions.
pub const DEFAULT_WORD_PATTERN: &str = r"[\w’]+";

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A regex-based tokenizer that extracts word tokens.
///
/// Tokens are emitted in order of appearance, carrying their 0-based
/// stream position and byte offsets into the source text. Text with no
/// matching runs yields an empty stream, never an error.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_WORD_PATTERN)
    }

    /// Create a new word tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| BookwormError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_apostrophe_stays_in_token() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("don’t stop").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "don’t");
        // U+2019 is three bytes, so the first token spans 7 bytes
        assert_eq!(tokens[0].end_offset, 7);
        assert_eq!(tokens[1].text, "stop");
        assert_eq!(tokens[1].start_offset, 8);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize("Beware; for I am fearless.")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Beware", "for", "I", "am", "fearless"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());

        let tokens: Vec<Token> = tokenizer.tokenize("!!! ???").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = WordTokenizer::with_pattern(r"[a-z]+").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("abc123def").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[1].text, "def");
    }

    #[test]
    fn test_invalid_pattern() {
        let result = WordTokenizer::with_pattern("[");
        match result {
            Err(BookwormError::Analysis(_)) => {} // Expected
            other => panic!("Expected analysis error, got {other:?}"),
        }
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let tokenizer = WordTokenizer::new().unwrap();
        let first: Vec<Token> = tokenizer.tokenize("the same text").unwrap().collect();
        let second: Vec<Token> = tokenizer.tokenize("the same text").unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordTokenizer::new().unwrap().name(), "word");
    }
}
