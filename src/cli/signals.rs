//! Shutdown signal handling for the bridge server

use std::io;

use tracing::info;

/// Why the server is shutting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT / Ctrl+C
    Interrupt,
    /// SIGTERM
    Terminate,
}

/// Wait until the process is asked to stop
#[cfg(unix)]
pub async fn wait_for_shutdown() -> io::Result<ShutdownReason> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    let reason = tokio::select! {
        _ = sigint.recv() => ShutdownReason::Interrupt,
        _ = sigterm.recv() => ShutdownReason::Terminate,
    };
    info!(?reason, "Received shutdown signal");
    Ok(reason)
}

/// Wait until the process is asked to stop
#[cfg(not(unix))]
pub async fn wait_for_shutdown() -> io::Result<ShutdownReason> {
    tokio::signal::ctrl_c().await?;
    info!(reason = ?ShutdownReason::Interrupt, "Received shutdown signal");
    Ok(ShutdownReason::Interrupt)
}
