//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Quill, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! - `POST /predict` - Run the research pipeline for a query
//! - `GET /health` - Health check endpoint
//! - `GET /openapi.json` - Generated OpenAPI document
//!
//! # Error Envelope
//!
//! Failures are real HTTP statuses with an `{"error": <message>}` body: a
//! missing or blank query is a 400, a failed pipeline run is a 500. A 200
//! always carries `{"output": <string>}`.

use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

/// OpenAPI document for the service, served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::predict, handlers::health),
    components(schemas(
        crate::types::PredictRequest,
        crate::types::PredictResponse,
        crate::types::HealthResponse
    )),
    tags(
        (name = "predict", description = "Research pipeline"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
