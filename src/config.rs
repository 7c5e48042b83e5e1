//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of cache slots
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// JSON file of track records; no file means an empty library
    pub library_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Number of cache slots (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LIBRARY_PATH` - Track library JSON file (default: none)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            library_path: env::var("LIBRARY_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 10,
            server_port: 3000,
            library_path: None,
        }
    }
}
