//! Command line argument parsing for the Bookworm CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ReportConfig;
use crate::error::Result;

/// Bookworm - lexical statistics for Project Gutenberg books
#[derive(Parser, Debug, Clone)]
#[command(name = "bookworm")]
#[command(about = "Lexical statistics for Project Gutenberg books")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Bookworm Contributors")]
#[command(long_about = None)]
pub struct BookwormArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// URL of the plain-text book to analyze
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Number of frequent words to report
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Number of longest distinct words to report
    #[arg(long, value_name = "N")]
    pub top_longest: Option<usize>,

    /// Number of palindromes to report
    #[arg(long, value_name = "N")]
    pub top_palindromes: Option<usize>,

    /// Configuration file path (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Fail on fetch errors instead of reporting over an empty text
    #[arg(long)]
    pub strict: bool,

    /// Request timeout for the book fetch, in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,
}

impl BookwormArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Resolve the effective run configuration.
    ///
    /// Starts from the defaults, applies the configuration file when one
    /// is given, then lets individual flags override.
    pub fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_file(path)?,
            None => ReportConfig::default(),
        };

        if let Some(url) = &self.url {
            config.book_url = url.clone();
        }
        if let Some(n) = self.top_words {
            config.top_words = n;
        }
        if let Some(n) = self.top_longest {
            config.top_longest = n;
        }
        if let Some(n) = self.top_palindromes {
            config.top_palindromes = n;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if self.strict {
            config.strict_fetch = true;
        }

        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
