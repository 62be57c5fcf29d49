use crate::models::ReadyResponse;
use crate::routes;
use axum::Json;

/// GET /ready handler - Readiness endpoint
///
/// There is nothing to warm up; once the listener is bound the service is
/// ready, so this always reports ready.
#[utoipa::path(
    get,
    path = routes::READY,
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse)
    ),
    tag = "service"
)]
pub async fn ready_handler() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "READY".to_string(),
        ready: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::any};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_ready_body_is_exact() {
        let app = Router::new().route(crate::routes::READY, any(ready_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"status":"READY","ready":true}"#);
    }
}
