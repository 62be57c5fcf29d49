use crate::data;
use crate::models::HealthResponse;
use crate::routes;
use axum::Json;
use chrono::Utc;

/// GET /health handler - Health check endpoint
///
/// The service holds no external dependencies, so health is unconditional:
/// a fresh timestamp is the only per-request state.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "service"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    tracing::debug!("Health check");
    Json(HealthResponse {
        status: "UP".to_string(),
        service: data::SERVICE_NAME.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
