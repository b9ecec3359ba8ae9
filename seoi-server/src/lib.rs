//! seoi-server library - SEO meta tag inspection service
//!
//! Fetches a page, extracts its meta tags, scores them against a fixed
//! checklist and returns prioritized recommendations.

use axum::{routing::post, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod analyzer;
pub mod api;
pub mod error;

use analyzer::Analyzer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    /// Server start time, reported as uptime by /health
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            startup_time: seoi_common::time::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/analyze", post(api::analyze_url))
        .route("/api/report", post(api::build_analysis_report))
        .route("/api/export/csv", post(api::export_csv))
        .route("/api/buildinfo", get(api::get_build_info));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
