//! Report assembly.
//!
//! [`BookReport`] is the complete result of one analysis run, and
//! [`build_report`] computes it from a token sequence using the
//! configured take-N parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::stopwords::StopwordSet;
use crate::analysis::token::Token;
use crate::config::ReportConfig;
use crate::stats::frequency::{WordCount, top_frequent};
use crate::stats::length::longest_by_length;
use crate::stats::palindrome::longest_palindromes;

/// The complete lexical report over one book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookReport {
    /// Raw token count, before any filtering
    pub total_words: usize,

    /// The most frequent non-stopword words with their counts
    pub frequent_words: Vec<WordCount>,

    /// The longest distinct words, grouped by character length
    pub longest_words: BTreeMap<usize, Vec<String>>,

    /// The longest distinct palindromic non-stopword words
    pub palindromes: Vec<String>,
}

/// Build the full report over a token sequence.
///
/// `total_words` counts every token; each statistic applies its own
/// filtering and the take-N parameter configured for it.
pub fn build_report(
    tokens: &[Token],
    stopwords: &StopwordSet,
    config: &ReportConfig,
) -> BookReport {
    BookReport {
        total_words: tokens.len(),
        frequent_words: top_frequent(tokens, stopwords, config.top_words),
        longest_words: longest_by_length(tokens, config.top_longest),
        palindromes: longest_palindromes(tokens, stopwords, config.top_palindromes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};

    fn tokenize(text: &str) -> Vec<Token> {
        let tokenizer = WordTokenizer::new().unwrap();
        tokenizer.tokenize(text).unwrap().collect()
    }

    #[test]
    fn test_build_report() {
        let tokens = tokenize("Wow wow civic hello a");
        let stopwords = StopwordSet::from_words(vec!["a"]);
        let config = ReportConfig {
            top_words: 3,
            top_longest: 3,
            top_palindromes: 3,
            ..ReportConfig::default()
        };

        let report = build_report(&tokens, &stopwords, &config);

        assert_eq!(report.total_words, 5);
        assert_eq!(report.frequent_words.len(), 3);
        assert_eq!(report.frequent_words[0].word, "wow");
        assert_eq!(report.frequent_words[0].count, 2);
        assert_eq!(
            report.longest_words[&5],
            vec!["civic".to_string(), "hello".to_string()]
        );
        assert_eq!(report.longest_words[&3], vec!["wow".to_string()]);
        assert_eq!(
            report.palindromes,
            vec!["civic".to_string(), "wow".to_string()]
        );
    }

    #[test]
    fn test_empty_tokens() {
        let stopwords = StopwordSet::new();
        let config = ReportConfig::default();

        let report = build_report(&[], &stopwords, &config);

        assert_eq!(report.total_words, 0);
        assert!(report.frequent_words.is_empty());
        assert!(report.longest_words.is_empty());
        assert!(report.palindromes.is_empty());
    }

    #[test]
    fn test_total_words_counts_stopwords() {
        let tokens = tokenize("the the the");
        let stopwords = StopwordSet::new();
        let config = ReportConfig::default();

        let report = build_report(&tokens, &stopwords, &config);

        assert_eq!(report.total_words, 3);
        assert!(report.frequent_words.is_empty());
    }

    #[test]
    fn test_report_json_shape() {
        let tokens = tokenize("civic wow");
        let stopwords = StopwordSet::new();
        let config = ReportConfig::default();

        let report = build_report(&tokens, &stopwords, &config);
        let value = serde_json::to_value(&report).unwrap();

        assert!(value.get("total_words").is_some());
        assert!(value.get("frequent_words").is_some());
        assert!(value.get("longest_words").is_some());
        assert!(value.get("palindromes").is_some());
    }
}
