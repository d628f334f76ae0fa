use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Each variant's display string is the user-facing message; validation
/// messages are fixed wire contract and must not be reworded.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON data")]
    InvalidJson,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Lines cannot be empty")]
    EmptyLines,

    #[error("Each line must be 75 characters or less")]
    LineTooLong,

    #[error("All arrays must have the same length as lines")]
    LengthMismatch,

    #[error("Handwriting model not loaded")]
    ModelNotLoaded,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::ModelNotLoaded => ApiError::ModelNotLoaded,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Failures inside the render orchestration (temp file, engine, read-back).
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Handwriting model not loaded")]
    ModelNotLoaded,

    #[error("render task failed: {0}")]
    TaskJoin(String),

    #[error("{0}")]
    Engine(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson
            | ApiError::MissingField(_)
            | ApiError::EmptyLines
            | ApiError::LineTooLong
            | ApiError::LengthMismatch => StatusCode::BAD_REQUEST,
            ApiError::ModelNotLoaded | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
