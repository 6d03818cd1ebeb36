//! Logger module
//!
//! Console logging for the dev server: the startup banner, per-request
//! access lines on stdout, and error/warning output on stderr.

use crate::config::AppState;
use chrono::Local;
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Print the startup banner with the URLs to open.
pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    println!("======================================");
    println!("Dev server running at http://{addr}");
    println!("Serving files from: {}", state.root.display());
    println!(
        "Open your dashboard: http://{addr}/{}",
        state.config.files.default_document
    );
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] Connection accepted from {peer_addr}", timestamp());
}

pub fn log_request(method: &str, path: &str) {
    println!("[{}] \"{method} {path}\"", timestamp());
}

pub fn log_response(status: u16, body_bytes: usize) {
    println!("[{}] -> {status} ({body_bytes} bytes)", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
