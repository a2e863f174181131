//! Core request/response types and error handling.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Body of a `POST /predict` request.
///
/// `query` is modeled as an `Option` so a missing field is caught by the
/// handler and reported as a 400 instead of a framework rejection.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PredictRequest {
    /// The user query to run through the pipeline
    #[serde(default)]
    pub query: Option<String>,
}

/// Body of a successful `POST /predict` response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    /// The final synthesized answer
    pub output: String,
}

/// Body of a `GET /health` response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the server is up
    pub status: String,
    /// Server crate version
    pub version: String,
}

// ============= Error Types =============

/// Application-level error taxonomy.
///
/// Tool adapters have their own recoverable error type
/// ([`crate::tools::ToolError`]); anything that reaches this enum aborts the
/// current request and is rendered as an HTTP error status with an
/// `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model/inference-engine failure
    #[error("LLM error: {0}")]
    LLM(String),

    /// Missing resource
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or rejected client input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::LLM(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
