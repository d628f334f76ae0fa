use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::server::AppState;

/// Response from the /health endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy": this endpoint reports liveness, not readiness
    pub status: String,
    /// Whether the handwriting engine loaded at startup
    pub model_loaded: bool,
}

/// Check server health
///
/// Always returns 200; `model_loaded` tells readiness apart from liveness.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is alive", body = HealthResponse),
    ),
    tag = "Status"
)]
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.engine.is_loaded(),
    })
}
