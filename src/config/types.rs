// Configuration types module
// Defines the configuration data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub files: FilesConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

/// Served-files configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Route root; every served file must live below this directory
    pub root: String,
    /// File served when the request path is `/`
    pub default_document: String,
}
