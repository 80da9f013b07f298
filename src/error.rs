use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::content::source::SourceError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors crossing the HTTP boundary. Resolution failures never appear
/// here; the chain's contract is tri-state, not error-raising. These
/// cover the operations that can genuinely refuse (create, bad input).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("no live content source is configured")]
    NoLiveSource,

    #[error("source error: {0}")]
    Source(SourceError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SourceError> for ServiceError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotConfigured(_) => ServiceError::NoLiveSource,
            other => ServiceError::Source(other),
        }
    }
}

impl ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::NoLiveSource => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Source(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "BAD_REQUEST",
            ServiceError::NotFound => "NOT_FOUND",
            ServiceError::NoLiveSource => "NO_LIVE_SOURCE",
            ServiceError::Source(_) => "SOURCE_ERROR",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
