use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    EnvResponse, HealthResponse, HomeResponse, Item, ItemsResponse, MemoryInfo, ReadyResponse,
    User, UsersResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-demo-service API",
        version = "0.1.0",
        description = "A minimal demo service serving fixed JSON data and runtime facts"
    ),
    paths(
        handlers::home::home_handler,
        handlers::health::health_handler,
        handlers::ready::ready_handler,
        handlers::users::users_handler,
        handlers::items::items_handler,
        handlers::env::env_handler
    ),
    components(
        schemas(
            HomeResponse,
            HealthResponse,
            ReadyResponse,
            User,
            UsersResponse,
            Item,
            ItemsResponse,
            EnvResponse,
            MemoryInfo,
            ErrorResponse
        )
    ),
    tags(
        (name = "service", description = "Service discovery and probe endpoints"),
        (name = "api", description = "Demo data and runtime facts")
    )
)]
pub struct ApiDoc;
