//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flora_ml_client::PredictError;
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Submission arrived without an image part.
    #[error("Please select a file.")]
    NoFileSelected,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("The prediction service took too long to respond")]
    UpstreamTimeout,

    #[error("Prediction failed: {0}")]
    Upstream(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoFileSelected | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Stable machine-readable code for the page script.
    fn code(&self) -> &'static str {
        match self {
            ApiError::NoFileSelected => "no_file_selected",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::UpstreamTimeout => "prediction_timeout",
            ApiError::Upstream(_) => "prediction_failed",
        }
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Timeout(_) => ApiError::UpstreamTimeout,
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
            code: self.code(),
        };

        (status, Json(body)).into_response()
    }
}
