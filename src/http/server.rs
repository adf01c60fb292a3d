//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid server configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let grace = Duration::from_secs(config.http.shutdown_grace_seconds);

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone(), grace);

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is told to shut down.
///
/// The bound address is available from [`Handle::listening`], which makes
/// port `0` usable for ephemeral listeners.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
