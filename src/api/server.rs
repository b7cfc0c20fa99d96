//! API server lifecycle: bind, serve, stop on a shutdown signal.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::router::clinic_api_router;
use crate::core_state::ClinicState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: SocketAddr, reason: String },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serve the clinic API on `addr` until `shutdown` resolves.
///
/// In-flight requests finish before this returns.
pub async fn serve(
    core: Arc<ClinicState>,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr,
            reason: e.to_string(),
        })?;
    let local = listener.local_addr()?;

    let app = clinic_api_router(core);

    tracing::info!(addr = %local, "Clinic API server started");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("Clinic API server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
