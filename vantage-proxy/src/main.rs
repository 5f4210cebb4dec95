//! # Vantage Proxy
//!
//! Thin reverse proxy between the dashboard origin and the backend.
//! Configuration comes from the environment (`VANTAGE_BACKEND_URL`,
//! `VANTAGE_PROXY_HOST`, `VANTAGE_PROXY_PORT`).

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vantage_config::ConfigLoader;
use vantage_proxy::{ProxyState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Override via RUST_LOG.
                    "info,tower_http=warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConfigLoader::load().context("loading configuration")?;

    let state = ProxyState::new(config.backend.base_url.clone());
    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = config.proxy.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, backend = %config.backend.base_url, "proxy listening");

    axum::serve(listener, app).await?;
    Ok(())
}
