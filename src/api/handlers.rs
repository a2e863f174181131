//! Request handlers

use crate::AppState;
use crate::types::{AppError, HealthResponse, PredictRequest, PredictResponse, Result};
use axum::{Json, extract::State};

/// Run the research pipeline for one query
#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Pipeline completed", body = PredictResponse),
        (status = 400, description = "Missing or blank query"),
        (status = 500, description = "Pipeline failed")
    ),
    tag = "predict"
)]
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>> {
    let query = payload
        .query
        .ok_or_else(|| AppError::InvalidInput("missing required field: query".to_string()))?;

    if query.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "query must not be blank".to_string(),
        ));
    }

    let output = state.pipeline.run(&query).await?;

    Ok(Json(PredictResponse {
        output: output.answer,
    }))
}

/// Service health and version
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Generated OpenAPI document
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(crate::api::ApiDoc::openapi())
}
