//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use seoi_common::time;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = (time::now() - state.startup_time).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "seoi-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
