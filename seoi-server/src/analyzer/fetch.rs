//! Page fetcher
//!
//! One GET per analysis, no retries. The client is built once and shared by
//! all requests.

use std::time::{Duration, Instant};
use url::Url;

use super::AnalyzeError;

/// HTTP client for target pages
#[derive(Debug, Clone)]
pub struct PageFetcher {
    http_client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, AnalyzeError> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| AnalyzeError::Client(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Fetch the body of `url` as text
    ///
    /// Transport failures and non-2xx statuses are `Fetch` errors; a body
    /// that cannot be read is a `Parse` error.
    pub async fn fetch(&self, url: &Url) -> Result<String, AnalyzeError> {
        let started = Instant::now();
        tracing::debug!(url = %url, "Fetching page");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AnalyzeError::Fetch {
                status: None,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(url = %url, status = status.as_u16(), "Target returned non-success status");
            return Err(AnalyzeError::Fetch {
                status: Some(status.as_u16()),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Parse(format!("Failed to read response body: {}", e)))?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(body)
    }
}
