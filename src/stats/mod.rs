//! Lexical statistics for Bookworm.
//!
//! This module provides the three statistics computed over a token
//! sequence: word frequency, longest words grouped by character length,
//! and longest palindromes. All of them are total functions with no
//! failure modes, including over empty input.

pub mod frequency;
pub mod length;
pub mod palindrome;

// Re-export commonly used types
pub use frequency::*;
pub use length::*;
pub use palindrome::*;
