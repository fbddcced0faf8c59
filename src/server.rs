//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client and the dashboard service, loads the initial
//! target list and runs the Axum server until `Ctrl+C`.

use crate::application::services::DashboardService;
use crate::config::Config;
use crate::infrastructure::http::HttpMetricsSource;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// A failing initial URL list load is logged and does not prevent startup;
/// the list can be reloaded later through `POST /api/targets/refresh`.
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let source = HttpMetricsSource::new(&config.upstream_settings())
        .context("Failed to create upstream client")?;

    let dashboard = DashboardService::new(Arc::new(source));

    match dashboard.refresh_url_list().await {
        Ok(targets) => tracing::info!("Loaded {} target URLs", targets.len()),
        Err(e) => tracing::warn!("Initial URL list load failed: {}", e),
    }

    let state = AppState::new(dashboard);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
