//! Page analysis endpoint

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use seoi_common::seo::{sort_by_priority, AnalysisResult};

use crate::error::ApiResult;
use crate::AppState;

/// Body of `POST /api/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Recommendation ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationOrder {
    /// Rule order
    #[default]
    Rules,
    /// Priority ascending, rule order within a priority
    Priority,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeParams {
    #[serde(default)]
    pub order: RecommendationOrder,
}

/// POST /api/analyze[?order=rules|priority]
///
/// Fetches the page and returns the full analysis. A bare domain is
/// treated as `https://<domain>`.
pub async fn analyze_url(
    State(state): State<AppState>,
    params: Result<Query<AnalyzeParams>, QueryRejection>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Query(params) = params?;
    let Json(request) = payload?;
    tracing::debug!(url = %request.url, order = ?params.order, "Analyze request");

    let mut result = state.analyzer.analyze(&request.url).await?;
    if params.order == RecommendationOrder::Priority {
        sort_by_priority(&mut result.recommendations);
    }

    Ok(Json(result))
}
