use std::sync::Arc;

use anyhow::Context;
use flow_relay::{config::Config, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flow_relay=debug,tower_http=debug")),
        )
        .init();

    tracing::debug!(?config, "loaded configuration");

    let addr = config.addr;
    let state = Arc::new(AppState::new(config));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("flow relay listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
