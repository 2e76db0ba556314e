// Signal handling module
//
// - SIGINT:  Graceful shutdown (Ctrl+C)
// - SIGTERM: Graceful shutdown (Unix only)

use crate::logger;

/// Resolves once the operator asks the server to stop.
///
/// If the handlers cannot be registered the error is logged and the future
/// never resolves, leaving the server running.
pub async fn shutdown_signal() {
    match wait_for_signal().await {
        Ok(name) => logger::log_shutdown(name),
        Err(e) => {
            logger::log_error(&format!("Failed to listen for shutdown signals: {e}"));
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        res = tokio::signal::ctrl_c() => res.map(|()| "SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|()| "Ctrl+C")
}
