// Connection module
// Serves one accepted TCP connection on its own task

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};

use crate::config::SiteState;
use crate::handler;
use crate::logger;

/// Handle a single connection in a spawned task.
///
/// A client gets `state.header_read_timeout` to send each request head. Once a
/// request is read, writing the response is not time-limited.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<SiteState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder
            .timer(TokioTimer::new())
            .header_read_timeout(state.header_read_timeout)
            .keep_alive(state.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
        );

        if let Err(err) = conn.await {
            if err.is_timeout() {
                logger::log_debug(&format!("Connection from {peer_addr} timed out waiting for a request"));
            } else {
                logger::log_connection_error(&err);
            }
        }
    });
}
