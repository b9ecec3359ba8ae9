//! Target URL normalization
//!
//! Input without a scheme is treated as `https://`. The normalized `Url` is
//! both what gets fetched and what is reported back, so `example.com` and
//! `https://example.com` are indistinguishable after this step.

use thiserror::Error;
use url::Url;

/// URL validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("URL is required")]
    Empty,

    #[error("Please enter a valid URL including http:// or https:// ({0})")]
    Malformed(String),
}

fn has_http_prefix(input: &str) -> bool {
    let lower = input
        .get(..8)
        .unwrap_or(input)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalize user input into an absolute http(s) URL
pub fn normalize_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let candidate = if has_http_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    // http(s) URLs always carry a host once they parse
    Url::parse(&candidate).map_err(|e| UrlError::Malformed(e.to_string()))
}

/// Host part of a reported URL, used for previews and export file names
///
/// Strips the scheme and keeps everything up to the first `/`.
pub fn display_domain(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}
