//! Error types for the Bookworm library.
//!
//! This module provides error handling for all Bookworm operations.
//! All errors are represented by the [`BookwormError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use bookworm::error::{BookwormError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(BookwormError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Bookworm operations.
///
/// This enum represents all possible errors that can occur in the Bookworm
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum BookwormError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Fetch-related errors (transport failures, non-success statuses)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Analysis-related errors (tokenization, pattern construction, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration-related errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BookwormError.
pub type Result<T> = std::result::Result<T, BookwormError>;

impl BookwormError {
    /// Create a new fetch error.
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        BookwormError::Fetch(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BookwormError::Analysis(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BookwormError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BookwormError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        BookwormError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
