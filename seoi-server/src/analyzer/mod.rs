//! Page analysis: normalize, fetch, extract, score, recommend

pub mod extract;
pub mod fetch;

pub use extract::{extract_page, ExtractedPage};
pub use fetch::PageFetcher;

use seoi_common::config::ServiceConfig;
use seoi_common::seo::{
    compute_score, missing_tags, normalize_url, recommend, AnalysisResult, UrlError,
};
use seoi_common::time::now_iso8601;
use std::time::Instant;
use thiserror::Error;
use url::Url;

/// Analysis failure
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The input is not a usable URL
    #[error(transparent)]
    Validation(#[from] UrlError),

    /// Target unreachable or answered with a non-2xx status
    #[error("{}", fetch_message(.status, .reason))]
    Fetch { status: Option<u16>, reason: String },

    /// The response body could not be turned into a document
    #[error("{0}")]
    Parse(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

fn fetch_message(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("Failed to fetch page: {} {}", code, reason),
        None => format!("Failed to fetch page: {}", reason),
    }
}

/// Stateless page analyzer
///
/// Holds only the shared HTTP client, so one instance serves every request.
#[derive(Debug, Clone)]
pub struct Analyzer {
    fetcher: PageFetcher,
}

impl Analyzer {
    pub fn new(config: &ServiceConfig) -> Result<Self, AnalyzeError> {
        let fetcher = PageFetcher::new(&config.user_agent, config.fetch_timeout)?;
        Ok(Self { fetcher })
    }

    /// Analyze the page at `input`
    pub async fn analyze(&self, input: &str) -> Result<AnalysisResult, AnalyzeError> {
        let started = Instant::now();
        let url = normalize_url(input)?;
        let html = self.fetcher.fetch(&url).await?;
        let result = Self::analyze_document(&url, &html, now_iso8601());

        tracing::info!(
            url = %result.url,
            score = result.score,
            meta_tags = result.meta_tags.len(),
            recommendations = result.recommendations.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analysis complete"
        );

        Ok(result)
    }

    /// Deterministic part of an analysis over an already fetched document
    pub fn analyze_document(url: &Url, html: &str, timestamp: String) -> AnalysisResult {
        let ExtractedPage {
            tags,
            primary_color,
        } = extract_page(html);

        let score = compute_score(&tags);
        let recommendations = recommend(&tags);
        tracing::debug!(url = %url, missing = ?missing_tags(&tags), "Checklist tags missing");

        AnalysisResult {
            url: url.to_string(),
            meta_tags: tags,
            score,
            recommendations,
            timestamp,
            primary_color,
        }
    }
}
