//! Command implementations for the Bookworm CLI.

use tracing::{debug, info, warn};

use crate::analysis::stopwords::StopwordSet;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::cli::args::BookwormArgs;
use crate::cli::output::output_report;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::fetch::BookFetcher;
use crate::report::{BookReport, build_report};

/// Execute the report run described by the parsed arguments.
pub async fn execute_command(args: BookwormArgs) -> Result<()> {
    let config = args.resolve_config()?;

    let text = fetch_text(&config).await?;
    let report = analyze_text(&text, &config)?;

    output_report(&report, &args)
}

/// Fetch the book text, applying the configured failure policy.
async fn fetch_text(config: &ReportConfig) -> Result<String> {
    let fetcher = BookFetcher::new(config.timeout_secs)?;

    match fetcher.fetch(&config.book_url).await {
        Ok(text) => {
            info!("Fetched {} bytes from {}", text.len(), config.book_url);
            Ok(text)
        }
        Err(e) if !config.strict_fetch => {
            warn!("Fetch failed ({e}); reporting over an empty text");
            Ok(String::new())
        }
        Err(e) => Err(e),
    }
}

/// Tokenize the text and build the configured report over it.
pub fn analyze_text(text: &str, config: &ReportConfig) -> Result<BookReport> {
    let tokenizer = WordTokenizer::new()?;
    let tokens: Vec<Token> = tokenizer.tokenize(text)?.collect();
    debug!("Tokenized {} words", tokens.len());

    let stopwords = match &config.stopwords {
        Some(words) => StopwordSet::from_words(words.iter().cloned()),
        None => StopwordSet::new(),
    };

    Ok(build_report(&tokens, &stopwords, config))
}
