use crate::models::{EnvResponse, MemoryInfo};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

/// GET /api/env handler - Runtime environment facts
///
/// Reports the service version, host CPU and memory facts, the number of
/// alive tokio tasks, and the environment/hostname values carried in the
/// startup configuration. The refresh is limited to CPU and memory so the
/// probe stays cheap.
#[utoipa::path(
    get,
    path = routes::ENV,
    responses(
        (status = 200, description = "Runtime environment facts", body = EnvResponse)
    ),
    tag = "api"
)]
pub async fn env_handler(State(state): State<AppState>) -> Json<EnvResponse> {
    let system = System::new_with_specifics(
        RefreshKind::new()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything()),
    );
    let metrics = tokio::runtime::Handle::current().metrics();

    Json(EnvResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        cpu_count: system.cpus().len(),
        active_tasks: metrics.num_alive_tasks(),
        environment: state.config.environment.clone(),
        hostname: state.config.hostname.clone(),
        memory: MemoryInfo {
            total_bytes: system.total_memory(),
            used_bytes: system.used_memory(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::any};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(config: Config) -> Router {
        Router::new()
            .route(crate::routes::ENV, any(env_handler))
            .with_state(AppState {
                config: Arc::new(config),
            })
    }

    async fn fetch_env(config: Config) -> EnvResponse {
        let response = test_app(config)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/env")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_env_reports_defaults() {
        let config = Config {
            port: 8080,
            environment: "development".to_string(),
            hostname: "unknown".to_string(),
        };

        let env = fetch_env(config).await;

        assert_eq!(env.environment, "development");
        assert_eq!(env.hostname, "unknown");
        assert_eq!(env.version, env!("CARGO_PKG_VERSION"));
        assert!(env.cpu_count >= 1);
        assert!(env.memory.total_bytes >= env.memory.used_bytes);
    }

    #[tokio::test]
    async fn test_env_reflects_configuration() {
        let config = Config {
            port: 8080,
            environment: "production".to_string(),
            hostname: "api-7f9c4".to_string(),
        };

        let env = fetch_env(config).await;

        assert_eq!(env.environment, "production");
        assert_eq!(env.hostname, "api-7f9c4");
    }
}
