//! Service configuration types.

use serde::{Deserialize, Serialize};

/// Which service this process runs, with the settings for that role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ServiceConfig {
    /// Tool bridge that proxies tool calls to the backend.
    Bridge(BridgeConfig),

    /// Backend that owns the template catalog and issues case ids.
    Backend(BackendConfig),
}

/// How the discovery manifest advertises the bridge's tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestMode {
    /// Point at `/openapi.json`.
    #[default]
    OpenApi,

    /// List the tools inline with their input schemas.
    Inline,
}

impl ManifestMode {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "inline" => Self::Inline,
            _ => Self::OpenApi,
        }
    }
}

/// Bridge service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,

    /// Base URL of the backend service.
    pub backend_url: String,

    /// Public URL of this bridge, advertised in the OpenAPI `servers` field.
    pub public_url: String,

    /// Manifest variant served at `/.well-known/ai-plugin.json`.
    #[serde(default)]
    pub manifest_mode: ManifestMode,
}

/// Backend service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,

    /// Prefix that case status URLs are built from.
    #[serde(default = "default_status_url_prefix")]
    pub status_url_prefix: String,

    /// Maximum accepted request body, in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

const DEFAULT_BRIDGE_PORT: u16 = 3000;
const DEFAULT_BACKEND_PORT: u16 = 8080;
const DEFAULT_BACKEND_URL: &str = "https://reclaimassist.onrender.com";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

fn default_status_url_prefix() -> String {
    "https://example.com/cases/".to_string()
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_public_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::Bridge(BridgeConfig::default())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_BRIDGE_PORT,
            host: default_host(),
            enable_cors: default_cors(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            public_url: default_public_url(DEFAULT_BRIDGE_PORT),
            manifest_mode: ManifestMode::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_BACKEND_PORT,
            host: default_host(),
            enable_cors: default_cors(),
            status_url_prefix: default_status_url_prefix(),
            body_limit: default_body_limit(),
        }
    }
}

fn env_port(default: u16) -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(default)
}

fn env_cors() -> bool {
    std::env::var("RECLAIM_CORS")
        .map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(true)
}

impl ServiceConfig {
    /// Create a bridge config pointing at the given backend.
    pub fn bridge(port: u16, backend_url: impl Into<String>) -> Self {
        Self::Bridge(BridgeConfig {
            port,
            backend_url: backend_url.into(),
            public_url: default_public_url(port),
            ..Default::default()
        })
    }

    /// Create a backend config.
    pub fn backend(port: u16) -> Self {
        Self::Backend(BackendConfig {
            port,
            ..Default::default()
        })
    }

    /// Load service config from environment variables.
    pub fn from_env() -> Self {
        let role = std::env::var("RECLAIM_SERVICE")
            .unwrap_or_default()
            .to_lowercase();
        let host = std::env::var("RECLAIM_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = env_cors();

        match role.as_str() {
            "backend" => {
                let port = env_port(DEFAULT_BACKEND_PORT);
                let status_url_prefix = std::env::var("RECLAIM_STATUS_URL_PREFIX")
                    .unwrap_or_else(|_| default_status_url_prefix());
                let body_limit = std::env::var("RECLAIM_BODY_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_body_limit);
                Self::Backend(BackendConfig {
                    port,
                    host,
                    enable_cors,
                    status_url_prefix,
                    body_limit,
                })
            }
            _ => {
                let port = env_port(DEFAULT_BRIDGE_PORT);
                let backend_url = std::env::var("RECLAIM_BACKEND_URL")
                    .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
                let public_url = std::env::var("RECLAIM_PUBLIC_URL")
                    .unwrap_or_else(|_| default_public_url(port));
                let manifest_mode = std::env::var("RECLAIM_MANIFEST_MODE")
                    .map(|v| ManifestMode::parse(&v))
                    .unwrap_or_default();
                Self::Bridge(BridgeConfig {
                    port,
                    host,
                    enable_cors,
                    backend_url,
                    public_url,
                    manifest_mode,
                })
            }
        }
    }

    /// Get a description of this service for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Bridge(cfg) => format!(
                "bridge on {}:{} -> {}",
                cfg.host, cfg.port, cfg.backend_url
            ),
            Self::Backend(cfg) => format!("backend on {}:{}", cfg.host, cfg.port),
        }
    }

    /// Check if this config runs the bridge.
    pub fn is_bridge(&self) -> bool {
        matches!(self, Self::Bridge(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::ENV_TEST_LOCK;

    fn clear_env() {
        unsafe {
            for key in [
                "RECLAIM_SERVICE",
                "PORT",
                "RECLAIM_HOST",
                "RECLAIM_CORS",
                "RECLAIM_BACKEND_URL",
                "RECLAIM_PUBLIC_URL",
                "RECLAIM_MANIFEST_MODE",
                "RECLAIM_STATUS_URL_PREFIX",
                "RECLAIM_BODY_LIMIT",
            ] {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_defaults_to_bridge() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        match ServiceConfig::from_env() {
            ServiceConfig::Bridge(cfg) => {
                assert_eq!(cfg.port, 3000);
                assert_eq!(cfg.backend_url, "https://reclaimassist.onrender.com");
                assert_eq!(cfg.public_url, "http://localhost:3000");
                assert_eq!(cfg.manifest_mode, ManifestMode::OpenApi);
                assert!(cfg.enable_cors);
            }
            other => panic!("expected bridge config, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("RECLAIM_SERVICE", "Backend");
            std::env::set_var("PORT", "9090");
            std::env::set_var("RECLAIM_STATUS_URL_PREFIX", "https://status.test/c/");
            std::env::set_var("RECLAIM_CORS", "false");
        }
        match ServiceConfig::from_env() {
            ServiceConfig::Backend(cfg) => {
                assert_eq!(cfg.port, 9090);
                assert_eq!(cfg.status_url_prefix, "https://status.test/c/");
                assert_eq!(cfg.body_limit, 1024 * 1024);
                assert!(!cfg.enable_cors);
            }
            other => panic!("expected backend config, got {:?}", other),
        }
        clear_env();
    }

    #[test]
    fn test_bridge_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PORT", "4000");
            std::env::set_var("RECLAIM_BACKEND_URL", "http://backend.internal:8080");
            std::env::set_var("RECLAIM_MANIFEST_MODE", "inline");
        }
        match ServiceConfig::from_env() {
            ServiceConfig::Bridge(cfg) => {
                assert_eq!(cfg.port, 4000);
                assert_eq!(cfg.backend_url, "http://backend.internal:8080");
                assert_eq!(cfg.public_url, "http://localhost:4000");
                assert_eq!(cfg.manifest_mode, ManifestMode::Inline);
            }
            other => panic!("expected bridge config, got {:?}", other),
        }
        clear_env();
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }
        match ServiceConfig::from_env() {
            ServiceConfig::Bridge(cfg) => assert_eq!(cfg.port, 3000),
            other => panic!("expected bridge config, got {:?}", other),
        }
        clear_env();
    }

    #[test]
    fn test_description() {
        let config = ServiceConfig::backend(8081);
        assert_eq!(config.description(), "backend on 0.0.0.0:8081");
        assert!(!config.is_bridge());
    }
}
