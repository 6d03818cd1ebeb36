// Configuration module entry point
// Loads the init-only configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, FilesConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Build the compiled-in configuration.
    ///
    /// The server is deliberately zero-configuration: no config file, no
    /// environment variables, no CLI flags. Everything is a default set once
    /// here and never mutated afterwards.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.access_log", true)?
            .set_default("files.root", ".")?
            .set_default("files.default_document", "social-dashboard.html")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
