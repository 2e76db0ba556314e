// Server module entry point
// Accept loop, per-connection serving and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_listener;
pub use signal::shutdown_signal;

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::SiteState;
use crate::logger;

/// Accept connections until `shutdown` resolves, then close the listener.
///
/// Connections already in flight keep running on their own tasks.
pub async fn serve<F>(listener: TcpListener, state: Arc<SiteState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_info("Listener closed");
}
