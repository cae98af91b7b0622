use std::sync::Arc;

use anyhow::{Context, Result};
use glyco_config::ServiceConfig;
use glyco_server::{router, ServerState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServiceConfig::from_env().context("invalid configuration")?;
    let addr = config.bind_addr;

    let state = Arc::new(ServerState::from_config(config));
    if !state.handler.model().is_ready() {
        warn!("Serving without a model: /predict will answer 503");
    }

    let app = router(state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
