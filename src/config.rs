//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of cached render results
    pub max_entries: usize,
    /// TTL in seconds applied to each cached render
    pub render_ttl: u64,
    /// Background expiry sweep interval in seconds
    pub sweep_interval: u64,
    /// Directory holding the built browser bundle (app shell + assets)
    pub dist_dir: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 4000)
    /// - `CACHE_MAX_ENTRIES` - Maximum cached renders (default: 50)
    /// - `CACHE_TTL` - Render TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `DIST_DIR` - Browser bundle directory (default: "dist/browser")
    ///
    /// Unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            render_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            dist_dir: env::var("DIST_DIR").unwrap_or_else(|_| "dist/browser".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 4000,
            max_entries: 50,
            render_ttl: 300,
            sweep_interval: 60,
            dist_dir: "dist/browser".to_string(),
        }
    }
}
