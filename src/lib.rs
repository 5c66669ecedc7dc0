//! # Bookworm
//!
//! Lexical statistics for Project Gutenberg books.
//!
//! ## Features
//!
//! - Regex-based word tokenization with offset tracking
//! - Word frequency ranking with stopword filtering
//! - Longest-word grouping by character length
//! - Palindrome detection and ranking
//! - Async HTTP fetch of plain-text books
//! - Human-readable and JSON report output

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod stats;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
