//! Configuration management for the ReClaim services.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally loaded from a `.env` file) or defaults.
//! Configuration is resolved once at startup and never changes afterwards.

use super::service::ServiceConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// The role-specific settings (bridge or backend) live in [`ServiceConfig`];
/// everything else is shared by both services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Which service this process runs, and its settings.
    pub service: ServiceConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs and health checks.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "reclaim-assist".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            service: ServiceConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Shared variables are prefixed with `RECLAIM_` (`RECLAIM_SERVER_NAME`,
    /// `RECLAIM_LOG_LEVEL`). The listening port is read from `PORT`, the
    /// convention of most hosting platforms.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("RECLAIM_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("RECLAIM_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.service = ServiceConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::ENV_TEST_LOCK;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "reclaim-assist");
        assert_eq!(config.logging.level, "info");
        assert!(config.service.is_bridge());
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("RECLAIM_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "debug");
        unsafe {
            std::env::remove_var("RECLAIM_LOG_LEVEL");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("RECLAIM_SERVER_NAME", "reclaim-staging");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "reclaim-staging");
        unsafe {
            std::env::remove_var("RECLAIM_SERVER_NAME");
        }
    }
}
