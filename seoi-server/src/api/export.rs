//! CSV export endpoint

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use seoi_common::seo::{csv_file_name, to_csv, AnalysisResult};

use crate::error::ApiResult;

/// POST /api/export/csv
///
/// Serializes a result as a CSV attachment.
pub async fn export_csv(
    payload: Result<Json<AnalysisResult>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(result) = payload?;

    let file_name = csv_file_name(&result);
    let body = to_csv(&result);
    tracing::debug!(url = %result.url, file = %file_name, bytes = body.len(), "CSV export");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response())
}
