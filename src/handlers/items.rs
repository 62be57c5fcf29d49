use crate::data;
use crate::models::ItemsResponse;
use crate::routes;
use axum::Json;

/// GET /api/items handler - Fixed item collection
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "The demo item collection", body = ItemsResponse)
    ),
    tag = "api"
)]
pub async fn items_handler() -> Json<ItemsResponse> {
    Json(ItemsResponse {
        items: data::demo_items(),
    })
}
