//! HTTP server lifecycle
//!
//! Binds the listener and drives the Axum router until shutdown is signalled.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::api::{AppState, create_router};
use crate::config::Config;
use crate::error::{AppError, Result};

/// Binds a TCP listener, mapping failure to [`AppError::Bind`]
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| {
        tracing::error!("Failed to bind address {}: {}", addr, source);
        AppError::Bind { addr, source }
    })
}

/// Serves `app` on `listener` until `shutdown_rx` flips to `true`.
/// In-flight requests are allowed to finish.
pub async fn run(
    listener: TcpListener,
    app: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let requested = shutdown_rx.wait_for(|stop| *stop).await.is_ok();
            if !requested {
                // Sender gone: nothing can request shutdown any more.
                std::future::pending::<()>().await;
            }
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

/// Binds the configured port and serves the API
pub async fn serve(config: Config, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
    let addr = config.socket_addr();
    let listener = bind(addr).await?;

    let state = Arc::new(AppState { config });
    let app = create_router(state);

    tracing::info!("Lingo API server is running on http://localhost:{}", addr.port());
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /            - Health check");
    tracing::info!("  - GET /api/version - API version info");

    run(listener, app, shutdown_rx).await
}
