use crate::error::Result;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Fixed identifying header; wiki servers reject UA-less clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; tianzi/0.1)";

/// Timeout for image downloads.
pub const IMAGE_TIMEOUT_SECS: u64 = 10;
/// Timeout for HTML list and detail pages.
pub const PAGE_TIMEOUT_SECS: u64 = 15;

/// Thin wrapper around one configured HTTP client.
///
/// Surfaces status codes and raw payloads to the caller; the only errors it
/// produces are transport-level (connect failure, timeout, body read).
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(IMAGE_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch an HTML page as text, with the longer page timeout.
    ///
    /// The status code is deliberately not checked: an error page parses to
    /// zero qualifying tables and is handled by that path downstream.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("Fetching page {}", url);
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(PAGE_TIMEOUT_SECS))
            .send()
            .await?;
        Ok(response.text().await?)
    }

    /// Fetch raw bytes, surfacing the status code alongside the payload.
    pub async fn fetch_bytes(&self, url: &str) -> Result<(StatusCode, bytes::Bytes)> {
        debug!("Fetching bytes {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        Ok((status, bytes))
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
