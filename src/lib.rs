//! Static file server for pre-built single-page applications.
//!
//! Files under the Asset Root are served as-is; any other path gets the root
//! `index.html` with a 200 so a client-side router can render it.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

#[cfg(test)]
mod test_support;

pub use crate::config::{Config, SiteState};
pub use crate::error::StartupError;

use std::io;
use std::sync::Arc;

/// Validate the Asset Root, bind the listener and serve until SIGINT/SIGTERM.
///
/// Fails before any socket is opened when the Asset Root is unusable.
pub fn run(config: &Config) -> Result<(), StartupError> {
    match logger::init(&config.logging) {
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
        Err(e) => return Err(StartupError::LogInit(e)),
        Ok(()) => {}
    }

    let root = config.asset_root()?;
    let addr = config.socket_addr()?;
    let state = Arc::new(SiteState::new(config, root));
    if !state.root_index().is_file() {
        logger::log_warning(&format!(
            "{} not found, unmatched paths will fail",
            state.root_index().display()
        ));
    }

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = config.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(StartupError::Runtime)?;

    runtime.block_on(async {
        let listener =
            server::create_listener(addr).map_err(|e| StartupError::Bind(addr, e))?;
        logger::log_server_start(&addr, &state.root, config.server.workers);
        server::serve(listener, state, server::shutdown_signal()).await;
        Ok::<(), StartupError>(())
    })
}
