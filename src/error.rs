use std::io;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that stop the server before it starts accepting connections.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid listen address '{0}': {1}")]
    InvalidAddress(String, AddrParseError),
    #[error("asset directory not found: {}", .0.display())]
    AssetRootMissing(PathBuf),
    #[error("asset root is not a directory: {}", .0.display())]
    AssetRootNotDirectory(PathBuf),
    #[error("asset directory {} is not readable: {1}", .0.display())]
    AssetRootUnreadable(PathBuf, io::Error),
    #[error("failed to open log file: {0}")]
    LogInit(io::Error),
    #[error("failed to bind {0}: {1}")]
    Bind(SocketAddr, io::Error),
    #[error("failed to start runtime: {0}")]
    Runtime(io::Error),
}
