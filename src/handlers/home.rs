use crate::data;
use crate::error::ErrorResponse;
use crate::models::HomeResponse;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET / handler - Welcome endpoint
///
/// Lists the service identifier and every routed endpoint path. Matches the
/// root path exactly; everything else falls through to `not_found_handler`.
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Service welcome and endpoint listing", body = HomeResponse)
    ),
    tag = "service"
)]
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to Rust Demo Service".to_string(),
        endpoints: vec![
            routes::HEALTH.to_string(),
            routes::READY.to_string(),
            routes::USERS.to_string(),
            routes::ITEMS.to_string(),
            routes::ENV.to_string(),
        ],
        service: data::SERVICE_NAME.to_string(),
    })
}

/// Fallback handler for every path outside the route table.
///
/// Returns the JSON not-found body rather than an empty 404.
pub async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_string(),
        }),
    )
}
