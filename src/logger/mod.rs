//! Logger module
//!
//! Provides logging utilities for the server:
//! - Server lifecycle logging
//! - Leveled error, warning, info and debug lines
//! - Optional access logging in several formats
//! - File-based logging support

mod format;
pub mod writer;

pub use format::{version_label, AccessLogEntry};

use crate::config::{AccessLogFormat, LogLevel, LoggingConfig};
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        config.level,
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

/// Lines are emitted at `info` and below until `init()` has run
fn enabled(level: LogLevel) -> bool {
    writer::get().map_or(level <= LogLevel::Info, |w| w.enabled(level))
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Startup banner, printed whatever the configured level
pub fn log_server_start(addr: &SocketAddr, root: &Path, workers: Option<usize>) {
    write_info("======================================");
    write_info(&format!("Serving from: {}", root.display()));
    write_info(&format!("Listening on: http://{addr}"));
    if let Some(workers) = workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================");
}

pub fn log_shutdown(reason: &str) {
    log_info(&format!("Shutdown requested ({reason}), closing listener"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_debug(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    if enabled(LogLevel::Error) {
        write_error(&format!("[ERROR] {message}"));
    }
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_info(message: &str) {
    if enabled(LogLevel::Info) {
        write_info(&format!("[INFO] {message}"));
    }
}

pub fn log_debug(message: &str) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[DEBUG] {message}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: AccessLogFormat) {
    write_access(&entry.format(format));
}
