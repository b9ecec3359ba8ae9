//! Derived report endpoint

use axum::{extract::rejection::JsonRejection, Json};
use seoi_common::seo::{build_report, AnalysisReport, AnalysisResult};

use crate::error::ApiResult;

/// POST /api/report
///
/// Rating, per-tag status, category breakdown and social preview for a
/// previously returned result. Nothing is fetched.
pub async fn build_analysis_report(
    payload: Result<Json<AnalysisResult>, JsonRejection>,
) -> ApiResult<Json<AnalysisReport>> {
    let Json(result) = payload?;
    Ok(Json(build_report(&result)))
}
