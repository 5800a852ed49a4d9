//! HTTP server lifecycle
//!
//! Binds the configured address, serves the API and drains on shutdown.

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api;
use crate::config::ServerConfig;
use crate::state::AppState;

/// Bind `config` and serve until Ctrl+C or SIGTERM
pub async fn run(config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", listener.local_addr()?);

    serve(listener, AppState::new()).await
}

/// Serve the API on an already bound listener
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, api::build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[allow(
    clippy::expect_used,
    reason = "Signal handlers are critical infrastructure, panic is appropriate on failure"
)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
