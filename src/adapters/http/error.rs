//! Error type shared by every HTTP handler.
//!
//! All client mistakes end up here as a 4xx with an [`ErrorResponse`] body.
//! Nothing a caller sends can turn into a 5xx.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid path parameter: {0}")]
    InvalidPathParameter(String),

    #[error("Expected request with `Content-Type: application/json`")]
    MissingContentType,

    #[error("Malformed JSON body: {0}")]
    MalformedJson(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("No route for {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPathParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidPathParameter(_) => "INVALID_PATH_PARAMETER",
            ApiError::MissingContentType => "UNSUPPORTED_MEDIA_TYPE",
            ApiError::MalformedJson(_) => "MALFORMED_JSON",
            ApiError::InvalidBody(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::MissingContentType,
            JsonRejection::JsonSyntaxError(e) => ApiError::MalformedJson(e.body_text()),
            JsonRejection::JsonDataError(e) => ApiError::InvalidBody(e.body_text()),
            other => ApiError::MalformedJson(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPathParameter(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(status = %status, code = self.code(), "Rejected request: {}", self);
        (status, Json(ErrorResponse::new(self.code(), self.to_string()))).into_response()
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
