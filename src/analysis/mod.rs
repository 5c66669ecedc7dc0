//! Text analysis module for Bookworm.
//!
//! This module provides the text analysis functionality the statistics are
//! built on: tokenization of raw text into word tokens, and the stopword
//! set used to filter low-information words.

pub mod stopwords;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use stopwords::*;
pub use token::*;
pub use tokenizer::*;
