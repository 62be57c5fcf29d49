use crate::data;
use crate::models::UsersResponse;
use crate::routes;
use axum::Json;

/// GET /api/users handler - Fixed user collection
#[utoipa::path(
    get,
    path = routes::USERS,
    responses(
        (status = 200, description = "The demo user collection", body = UsersResponse)
    ),
    tag = "api"
)]
pub async fn users_handler() -> Json<UsersResponse> {
    Json(UsersResponse {
        users: data::demo_users(),
    })
}
