//! Run configuration for report generation.
//!
//! [`ReportConfig`] carries everything a report run needs: the book URL,
//! the three take-N parameters, the fetch policy, and an optional custom
//! stopword list. Defaults reproduce the stock run; a JSON file can
//! override any subset of fields, and CLI flags override the file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::DEFAULT_TIMEOUT_SECS;

/// Default URL of the book to analyze (Frankenstein, Project Gutenberg).
pub const DEFAULT_BOOK_URL: &str = "https://www.gutenberg.org/cache/epub/84/pg84.txt";

/// Default number of frequent words to report.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Default number of longest distinct words to report.
pub const DEFAULT_TOP_LONGEST: usize = 5;

/// Default number of palindromes to report.
pub const DEFAULT_TOP_PALINDROMES: usize = 3;

/// Configuration for a report run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// URL of the plain-text book to fetch
    pub book_url: String,

    /// How many frequent words to report
    pub top_words: usize,

    /// How many longest distinct words to report
    pub top_longest: usize,

    /// How many palindromes to report
    pub top_palindromes: usize,

    /// Request timeout for the book fetch, in seconds
    pub timeout_secs: u64,

    /// Propagate fetch failures instead of coercing them to an empty text
    pub strict_fetch: bool,

    /// Custom stopword list replacing the default one
    pub stopwords: Option<Vec<String>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            book_url: DEFAULT_BOOK_URL.to_string(),
            top_words: DEFAULT_TOP_WORDS,
            top_longest: DEFAULT_TOP_LONGEST,
            top_palindromes: DEFAULT_TOP_PALINDROMES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict_fetch: false,
            stopwords: None,
        }
    }
}

impl ReportConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Fields missing from the file fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::BookwormError;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();

        assert_eq!(config.book_url, DEFAULT_BOOK_URL);
        assert_eq!(config.top_words, 10);
        assert_eq!(config.top_longest, 5);
        assert_eq!(config.top_palindromes, 3);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.strict_fetch);
        assert!(config.stopwords.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "book_url": "https://example.com/book.txt",
                "top_words": 7,
                "top_longest": 2,
                "top_palindromes": 1,
                "timeout_secs": 5,
                "strict_fetch": true,
                "stopwords": ["foo", "bar"]
            }}"#
        )
        .unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();

        assert_eq!(config.book_url, "https://example.com/book.txt");
        assert_eq!(config.top_words, 7);
        assert_eq!(config.top_longest, 2);
        assert_eq!(config.top_palindromes, 1);
        assert_eq!(config.timeout_secs, 5);
        assert!(config.strict_fetch);
        assert_eq!(
            config.stopwords,
            Some(vec!["foo".to_string(), "bar".to_string()])
        );
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_words": 3}}"#).unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();

        assert_eq!(config.top_words, 3);
        assert_eq!(config.book_url, DEFAULT_BOOK_URL);
        assert_eq!(config.top_longest, 5);
        assert!(!config.strict_fetch);
    }

    #[test]
    fn test_missing_file() {
        let result = ReportConfig::from_file(Path::new("/nonexistent/config.json"));

        match result {
            Err(BookwormError::Io(_)) => {} // Expected
            other => panic!("Expected IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = ReportConfig::from_file(file.path());

        match result {
            Err(BookwormError::Json(_)) => {} // Expected
            other => panic!("Expected JSON error, got {other:?}"),
        }
    }
}
