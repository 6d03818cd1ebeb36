// Application state module
// Immutable process-wide state shared with every request handler

use std::path::PathBuf;

use super::types::Config;

/// Process-wide state: the configuration and the canonicalized route root.
///
/// Built once at startup and shared behind an `Arc`. Nothing here is mutated
/// after construction, so request handlers need no locking.
pub struct AppState {
    pub config: Config,
    /// Absolute route root; candidate paths must stay below it
    pub root: PathBuf,
}

impl AppState {
    /// Canonicalize the configured root and capture it alongside the config.
    ///
    /// Fails when the root directory does not exist, which aborts startup.
    pub fn new(config: &Config) -> std::io::Result<Self> {
        let root = PathBuf::from(&config.files.root).canonicalize()?;
        Ok(Self {
            config: config.clone(),
            root,
        })
    }
}
