//! Logging
//!
//! Server lifecycle messages, per-request access log lines (combined or
//! JSON layout), and error/warning output, optionally to files.

mod format;
pub mod writer;

pub use format::{AccessLogEntry, LogFormat};

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize log output. Call once at startup, before the listener binds.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    writer::access("======================================");
    writer::access(&format!("{} site server started", config.server.site_name));
    writer::access(&format!("Listening on: http://{addr}"));
    writer::access(&format!("Log level: {}", config.logging.level));
    writer::access(&format!("Static dir: {}", config.routes.static_dir));
    writer::access(&format!(
        "Gallery dir: {} (served at {})",
        config.gallery.dir, config.gallery.public_base
    ));
    writer::access(&format!("Gallery API: http://{addr}/api/gallery"));
    writer::access(&format!("Health check: http://{addr}/api/health"));
    if let Some(workers) = config.server.workers {
        writer::access(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        writer::access(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        writer::access(&format!("Error log: {path}"));
    }
    writer::access("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    writer::access(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    writer::error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    writer::error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    writer::error(&format!("[WARN] {message}"));
}

/// One access log line, in the configured layout
pub fn log_access(entry: &AccessLogEntry, format_name: &str) {
    writer::access(&entry.render(LogFormat::from_name(format_name)));
}

/// Summary line for an accepted contact submission
pub fn log_contact_submission(
    name: &str,
    email: &str,
    phone: &str,
    inquiry_type: &str,
    message_preview: &str,
) {
    writer::access(&format!(
        "[Contact] name=\"{name}\" email={email} phone={phone} inquiry={inquiry_type} message=\"{message_preview}\""
    ));
}

pub fn log_shutdown() {
    writer::access("\n[Shutdown] Signal received, stopping server");
}
