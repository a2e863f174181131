use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Assemble the service router. State is attached by the caller.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(crate::api::handlers::predict))
        .route("/health", get(crate::api::handlers::health))
        .route("/openapi.json", get(crate::api::handlers::openapi))
}
