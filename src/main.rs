//! `business-days` HTTP server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use business_days::api::{AppState, create_router};
use business_days::config::{ConfigLoader, DEFAULT_CONFIG_PATH};
use business_days::holidays::ReqwestSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("business_days=info".parse()?),
        )
        .with_target(false)
        .init();

    let config_path =
        std::env::var("BUSINESS_DAYS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?;
    let addr = config.bind_address().to_string();

    let source = ReqwestSource::new(config.upstream())?;
    let state = AppState::new(config, Arc::new(source));
    let app = create_router(state).layer(TraceLayer::new_for_http());

    info!(config = %config_path, "Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
