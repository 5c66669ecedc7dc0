//! Palindrome statistics.
//!
//! Finds the longest distinct palindromic words in a token sequence,
//! excluding stopwords.
//!
//! # Examples
//!
//! ```
//! use bookworm::analysis::stopwords::StopwordSet;
//! use bookworm::analysis::token::Token;
//! use bookworm::stats::palindrome::longest_palindromes;
//!
//! let tokens = vec![
//!     Token::new("civic", 0),
//!     Token::new("hello", 1),
//!     Token::new("wow", 2),
//! ];
//! let stopwords = StopwordSet::new();
//!
//! let palindromes = longest_palindromes(&tokens, &stopwords, 3);
//! assert_eq!(palindromes, vec!["civic".to_string(), "wow".to_string()]);
//! ```

use ahash::AHashSet;

use crate::analysis::stopwords::StopwordSet;
use crate::analysis::token::Token;

/// Check whether a word reads the same forwards and backwards.
///
/// Comparison is character-wise, so multi-byte characters reverse cleanly.
/// Single-character words trivially qualify.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// Rank the longest distinct palindromic non-stopword words.
///
/// Tokens are lowercased, stopwords dropped, duplicates removed, and the
/// remaining palindromes sorted by character length descending with ties
/// broken by word ascending, then truncated to `limit` entries.
pub fn longest_palindromes(
    tokens: &[Token],
    stopwords: &StopwordSet,
    limit: usize,
) -> Vec<String> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut palindromes: Vec<(usize, String)> = Vec::new();

    for token in tokens {
        let word = token.text.to_lowercase();
        if stopwords.contains(&word) || !seen.insert(word.clone()) {
            continue;
        }
        if is_palindrome(&word) {
            palindromes.push((word.chars().count(), word));
        }
    }

    palindromes.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    palindromes.truncate(limit);
    palindromes.into_iter().map(|(_, word)| word).collect()
}
