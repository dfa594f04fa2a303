//! Configuration module for the portal backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared admin code for the staff surface (required in production)
    pub admin_code: Option<String>,
    /// Directory holding the per-collection JSON files
    pub data_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_code = env::var("NIESAT_ADMIN_CODE").ok();

        let data_dir = env::var("NIESAT_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let bind_addr = env::var("NIESAT_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid NIESAT_BIND_ADDR format");

        let log_level = env::var("NIESAT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            admin_code,
            data_dir,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("NIESAT_ADMIN_CODE");
        env::remove_var("NIESAT_DATA_DIR");
        env::remove_var("NIESAT_BIND_ADDR");
        env::remove_var("NIESAT_LOG_LEVEL");

        let config = Config::from_env();

        assert!(config.admin_code.is_none());
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
