//! Longest-word statistics.
//!
//! Groups the longest distinct words of a token sequence by character
//! length. Unlike the frequency and palindrome statistics, stopwords take
//! part in this one.
//!
//! # Examples
//!
//! ```
//! use bookworm::analysis::token::Token;
//! use bookworm::stats::length::longest_by_length;
//!
//! let tokens = vec![
//!     Token::new("civic", 0),
//!     Token::new("hello", 1),
//!     Token::new("wow", 2),
//! ];
//!
//! let groups = longest_by_length(&tokens, 3);
//! assert_eq!(groups[&5], vec!["civic".to_string(), "hello".to_string()]);
//! assert_eq!(groups[&3], vec!["wow".to_string()]);
//! ```

use std::collections::BTreeMap;

use ahash::AHashSet;

use crate::analysis::token::Token;

/// Group the longest distinct words by character length.
///
/// Tokens are lowercased and deduplicated, ordered by character length
/// descending with ties broken by word ascending, and the first `limit`
/// words of that ordering are grouped by their length. The limit counts
/// words, not lengths. Each group holds its words in ascending
/// lexicographic order, and keys only exist for lengths that actually
/// occur among the taken words.
pub fn longest_by_length(tokens: &[Token], limit: usize) -> BTreeMap<usize, Vec<String>> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut distinct: Vec<(usize, String)> = Vec::new();

    for token in tokens {
        let word = token.text.to_lowercase();
        if seen.insert(word.clone()) {
            distinct.push((word.chars().count(), word));
        }
    }

    distinct.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    distinct.truncate(limit);

    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (length, word) in distinct {
        groups.entry(length).or_default().push(word);
    }

    groups
}
