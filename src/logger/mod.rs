//! Logger module
//!
//! Console logging for the server: lifecycle messages to stdout, errors and
//! warnings to stderr, one access log line per request in the configured
//! format.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Bundle server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Access log format: {}", config.log_format));
    write_info("======================================\n");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_shutdown_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, initiating shutdown"));
}

pub fn log_shutdown() {
    write_info("[SIGNAL] Listener closed, no longer accepting connections");
}
