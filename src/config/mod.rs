// Configuration module entry point
// Loads layered configuration and validates the Asset Root before startup

mod state;
mod types;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::StartupError;

// Re-export public types
pub use state::SiteState;
pub use types::{
    AccessLogFormat, AssetsConfig, Config, LogLevel, LoggingConfig, PerformanceConfig,
    ServerConfig, DEFAULT_ASSET_ROOT, DEFAULT_HEADER_READ_TIMEOUT, DEFAULT_HOST,
    DEFAULT_INDEX_FILE, DEFAULT_PORT,
};

/// Configuration file looked up in the working directory (any format `config` supports)
pub const CONFIG_FILE: &str = "spa-server";

impl Config {
    /// Load `spa-server.{toml,json,yaml}` from the working directory, falling back to defaults
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from specified file path (extension optional, file optional)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("assets.root", DEFAULT_ASSET_ROOT)?
            .set_default("assets.index_file", DEFAULT_INDEX_FILE)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.header_read_timeout", DEFAULT_HEADER_READ_TIMEOUT)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, StartupError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| StartupError::InvalidAddress(addr, e))
    }

    /// Validate the Asset Root and return its canonical path.
    ///
    /// Must succeed before any socket is opened.
    pub fn asset_root(&self) -> Result<PathBuf, StartupError> {
        let root = &self.assets.root;
        let metadata = std::fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StartupError::AssetRootMissing(root.clone()),
            _ => StartupError::AssetRootUnreadable(root.clone(), e),
        })?;
        if !metadata.is_dir() {
            return Err(StartupError::AssetRootNotDirectory(root.clone()));
        }
        std::fs::read_dir(root)
            .and_then(|_| root.canonicalize())
            .map_err(|e| StartupError::AssetRootUnreadable(root.clone(), e))
    }
}
