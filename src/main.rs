mod api_doc;
mod config;
mod data;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-demo-service starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState {
        config: Arc::new(config),
    };

    let addr = state.config.bind_addr();
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind listener on {}", addr))?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
