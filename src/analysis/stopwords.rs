//! Stopword set implementation.
//!
//! This module provides the set of common words that the frequency and
//! palindrome statistics filter out. Includes a default English list,
//! with support for custom word lists.
//!
//! # Examples
//!
//! ```
//! use bookworm::analysis::stopwords::StopwordSet;
//!
//! let stopwords = StopwordSet::new(); // Uses the default English list
//! assert!(stopwords.contains("the"));
//! assert!(!stopwords.contains("monster"));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

/// Default English stopword list.
///
/// Common English words that carry little information for the statistics.
const DEFAULT_COMMON_WORDS: &[&str] = &[
    "a", "able", "about", "across", "after", "all", "almost", "also", "am", "among", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot", "could",
    "dear", "did", "do", "does", "either", "else", "ever", "every", "for", "from", "get", "got",
    "had", "has", "have", "he", "her", "hers", "him", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "just", "least", "let", "like", "likely", "may", "me", "might",
    "most", "must", "my", "neither", "no", "nor", "not", "of", "off", "often", "on", "only", "or",
    "other", "our", "own", "rather", "said", "says", "she", "should", "since", "so", "some",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "more", "upon", "us", "wants", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "yet", "you",
    "your", "shall", "before", "now", "one", "even",
];

/// Default English stopwords as a HashSet.
pub static DEFAULT_COMMON_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_COMMON_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// An immutable set of stopwords behind a cheap-to-clone handle.
///
/// Words are lowercased on construction, so membership checks against
/// lowercased tokens are case-insensitive by construction.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```
/// use bookworm::analysis::stopwords::StopwordSet;
///
/// let stopwords = StopwordSet::new();
/// assert!(stopwords.contains("cannot"));
/// assert!(!stopwords.contains("creature"));
/// ```
///
/// ## Custom Words
///
/// ```
/// use bookworm::analysis::stopwords::StopwordSet;
///
/// let stopwords = StopwordSet::from_words(vec!["custom", "words", "list"]);
/// assert_eq!(stopwords.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct StopwordSet {
    /// The set of stopwords
    words: Arc<HashSet<String>>,
}

impl StopwordSet {
    /// Create a new stopword set with the default English list.
    pub fn new() -> Self {
        Self::with_words(DEFAULT_COMMON_WORDS_SET.clone())
    }

    /// Create a new stopword set from an existing set of words.
    ///
    /// # Arguments
    ///
    /// * `words` - A set of words to treat as stopwords
    pub fn with_words(words: HashSet<String>) -> Self {
        let words = words.into_iter().map(|w| w.to_lowercase()).collect();
        StopwordSet {
            words: Arc::new(words),
        }
    }

    /// Create a new stopword set from a list of words.
    ///
    /// # Arguments
    ///
    /// * `words` - An iterator of words to treat as stopwords
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(|s| s.into()).collect();
        Self::with_words(words)
    }

    /// Check if a word is a stopword.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to check, expected in lowercase
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let stopwords = StopwordSet::new();

        assert_eq!(stopwords.len(), 125);
        assert!(stopwords.contains("a"));
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("cannot"));
        assert!(stopwords.contains("even"));
        assert!(!stopwords.contains("monster"));
        assert!(!stopwords.contains(""));
    }

    #[test]
    fn test_from_words() {
        let stopwords = StopwordSet::from_words(vec!["foo", "bar", "baz"]);

        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("foo"));
        assert!(!stopwords.contains("the"));
    }

    #[test]
    fn test_lowercased_on_construction() {
        let stopwords = StopwordSet::from_words(vec!["The", "AND"]);

        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(!stopwords.contains("The"));
    }

    #[test]
    fn test_empty_set() {
        let stopwords = StopwordSet::from_words(Vec::<String>::new());

        assert!(stopwords.is_empty());
        assert!(!stopwords.contains("the"));
    }

    #[test]
    fn test_clone_shares_words() {
        let stopwords = StopwordSet::new();
        let cloned = stopwords.clone();

        assert_eq!(stopwords.len(), cloned.len());
        assert!(cloned.contains("the"));
    }
}
