//! API error type and its HTTP mapping
//!
//! Client mistakes (bad input, unreachable target) are 400 with a
//! `{message}` body; everything else is 500 with `{message, error}`.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analyzer::AnalyzeError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request body or URL (400)
    #[error("{0}")]
    Validation(String),

    /// Target page could not be fetched (400)
    #[error("{0}")]
    Fetch(String),

    /// Anything else (500)
    #[error("{message}: {detail}")]
    Unexpected {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn unexpected(detail: impl ToString) -> Self {
        ApiError::Unexpected {
            message: "An unexpected error occurred",
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Fetch(_) => StatusCode::BAD_REQUEST,
            ApiError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::Validation(e) => ApiError::Validation(e.to_string()),
            e @ AnalyzeError::Fetch { .. } => ApiError::Fetch(e.to_string()),
            AnalyzeError::Parse(detail) => ApiError::Unexpected {
                message: "Failed to fetch or parse the URL",
                detail,
            },
            e @ AnalyzeError::Client(_) => ApiError::unexpected(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Missing fields and wrong types are user input problems too
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::Validation(message) | ApiError::Fetch(message) => {
                tracing::info!(status = status.as_u16(), %message, "Request rejected");
                json!({ "message": message })
            }
            ApiError::Unexpected { message, detail } => {
                tracing::error!(status = status.as_u16(), error = %detail, "{}", message);
                json!({ "message": message, "error": detail })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use seoi_common::seo::UrlError;

    #[test]
    fn test_analyze_errors_map_to_status() {
        let validation: ApiError = AnalyzeError::Validation(UrlError::Empty).into();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let fetch: ApiError = AnalyzeError::Fetch {
            status: Some(503),
            reason: "Service Unavailable".to_string(),
        }
        .into();
        assert_eq!(fetch.status(), StatusCode::BAD_REQUEST);
        assert_eq!(fetch.to_string(), "Failed to fetch page: 503 Service Unavailable");

        let parse: ApiError = AnalyzeError::Parse("bad body".to_string()).into();
        assert_eq!(parse.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(
            parse,
            ApiError::Unexpected {
                message: "Failed to fetch or parse the URL",
                ..
            }
        ));
    }
}
