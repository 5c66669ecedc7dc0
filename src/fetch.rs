//! HTTP fetching of book texts.
//!
//! One GET of a plain-text document. Transport failures and non-success
//! statuses surface as [`BookwormError::Fetch`]; what to do about a
//! failure is the caller's policy decision, not this module's.

use std::time::Duration;

use tracing::debug;

use crate::error::{BookwormError, Result};

/// Default timeout for the book fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client wrapper for fetching book texts.
#[derive(Clone, Debug)]
pub struct BookFetcher {
    client: reqwest::Client,
}

impl BookFetcher {
    /// Create a new fetcher with the given request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| BookwormError::fetch(format!("Failed to create HTTP client: {e}")))?;

        Ok(BookFetcher { client })
    }

    /// Fetch the document at `url` and return its body as text.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching book from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BookwormError::fetch(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BookwormError::fetch(format!(
                "Request to {url} returned status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BookwormError::fetch(format!("Reading body from {url} failed: {e}")))?;

        debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}
