//! Word frequency statistics.
//!
//! Counts how often each non-stopword word occurs in a token sequence and
//! ranks the result.
//!
//! # Examples
//!
//! ```
//! use bookworm::analysis::stopwords::StopwordSet;
//! use bookworm::analysis::token::Token;
//! use bookworm::stats::frequency::top_frequent;
//!
//! let tokens = vec![
//!     Token::new("Wow", 0),
//!     Token::new("wow", 1),
//!     Token::new("the", 2),
//! ];
//! let stopwords = StopwordSet::from_words(vec!["the"]);
//!
//! let ranked = top_frequent(&tokens, &stopwords, 10);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].word, "wow");
//! assert_eq!(ranked[0].count, 2);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::stopwords::StopwordSet;
use crate::analysis::token::Token;

/// A word paired with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The lowercased word
    pub word: String,

    /// How many times the word occurred
    pub count: u64,
}

/// Rank the most frequent non-stopword words in a token sequence.
///
/// Tokens are lowercased before counting, so tokens differing only in case
/// collapse to one entry. Results are sorted by count descending, with
/// count ties broken by word ascending, and truncated to `limit` entries.
pub fn top_frequent(tokens: &[Token], stopwords: &StopwordSet, limit: usize) -> Vec<WordCount> {
    let mut counts: AHashMap<String, u64> = AHashMap::new();

    for token in tokens {
        let word = token.text.to_lowercase();
        if stopwords.contains(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(limit);
    ranked
}
