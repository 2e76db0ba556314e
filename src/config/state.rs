// Runtime state module
// Immutable per-process state shared by every connection task

use std::path::PathBuf;
use std::time::Duration;

use super::types::{AccessLogFormat, Config};

/// Everything a request handler needs, built once at startup and shared through an `Arc`.
///
/// `root` is expected to be the canonical Asset Root, as returned by
/// [`Config::asset_root`]; containment checks compare canonical paths against it.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub root: PathBuf,
    pub index_file: String,
    /// `Some(format)` when access logging is enabled
    pub access_log: Option<AccessLogFormat>,
    pub keep_alive: bool,
    pub header_read_timeout: Duration,
}

impl SiteState {
    pub fn new(config: &Config, root: PathBuf) -> Self {
        Self {
            root,
            index_file: config.assets.index_file.clone(),
            access_log: config
                .logging
                .access_log
                .then_some(config.logging.access_log_format),
            keep_alive: config.performance.keep_alive,
            header_read_timeout: Duration::from_secs(config.performance.header_read_timeout),
        }
    }

    /// Path of the top-level index document used as the SPA fallback
    pub fn root_index(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }
}
