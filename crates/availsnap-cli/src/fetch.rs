//! Blocking feed retrieval.
//!
//! One HTTP GET per feed with a fixed timeout. No auth, no retries — a
//! failed feed is reported by the caller and the run continues.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

/// Per-request timeout. Feeds slower than this count as failed.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client shared by all feed fetches in a run.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch one feed URL and return the response body as ICS text.
    ///
    /// Any transport error or non-success HTTP status is an error.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Request failed: {}", truncate_url(url)))?
            .error_for_status()
            .with_context(|| format!("Feed returned error status: {}", truncate_url(url)))?;
        response.text().context("Failed to read response body")
    }
}

/// Cap a URL for log lines. Feed URLs often carry long opaque access tokens
/// that add no diagnostic value.
pub fn truncate_url(url: &str) -> &str {
    const MAX_LOG_CHARS: usize = 70;
    match url.char_indices().nth(MAX_LOG_CHARS) {
        Some((idx, _)) => &url[..idx],
        None => url,
    }
}
