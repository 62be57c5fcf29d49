use serde::{Deserialize, Serialize};

/// Response type for the welcome endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub endpoints: Vec<String>,
    pub service: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Response type for the readiness endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReadyResponse {
    pub status: String,
    pub ready: bool,
}

/// A single demo user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Response type for the user collection endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// A single demo item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

/// Response type for the item collection endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// Physical memory facts reported by the env endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemoryInfo {
    pub total_bytes: u64,
    pub used_bytes: u64,
}

/// Response type for the runtime environment endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EnvResponse {
    pub version: String,
    pub cpu_count: usize,
    pub active_tasks: usize,
    pub environment: String,
    pub hostname: String,
    pub memory: MemoryInfo,
}
