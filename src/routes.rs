// Route path constants - single source of truth for all API paths

use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HOME: &str = "/";
pub const HEALTH: &str = "/health";
pub const READY: &str = "/ready";
pub const USERS: &str = "/api/users";
pub const ITEMS: &str = "/api/items";
pub const ENV: &str = "/api/env";

/// Build the service router: the immutable path-to-handler mapping,
/// constructed once at startup and owned by the caller.
///
/// Routes match on exact path only and accept any method. Every path not in
/// the table falls through to the JSON not-found handler, so `/` matches the
/// root path and nothing else.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HOME, any(handlers::home_handler))
        .route(HEALTH, any(handlers::health_handler))
        .route(READY, any(handlers::ready_handler))
        .route(USERS, any(handlers::users_handler))
        .route(ITEMS, any(handlers::items_handler))
        .route(ENV, any(handlers::env_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
