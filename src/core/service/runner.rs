//! Service runner - starts the configured service.
//!
//! Also holds the HTTP plumbing both services share: binding, the CORS and
//! trace layers, and the health payload.

use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::backend::BackendServer;
use super::bridge::BridgeServer;
use super::{ServiceConfig, ServiceError, ServiceResult};

/// Service runner - runs the bridge or the backend per configuration.
pub struct ServiceRunner {
    config: ServiceConfig,
}

impl ServiceRunner {
    /// Create a new runner with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Create a runner from environment variables.
    pub fn from_env() -> Self {
        Self::new(ServiceConfig::from_env())
    }

    /// Get the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Start the configured service.
    ///
    /// This method blocks until the service shuts down.
    pub async fn run(self) -> ServiceResult<()> {
        info!("Starting service: {}", self.config.description());

        match self.config {
            ServiceConfig::Bridge(cfg) => BridgeServer::new(cfg).run().await,
            ServiceConfig::Backend(cfg) => BackendServer::new(cfg).run().await,
        }
    }
}

/// Bind `addr` and serve `app` with tracing and optional permissive CORS.
pub(crate) async fn serve(addr: &str, app: Router, enable_cors: bool) -> ServiceResult<()> {
    let mut app = app.layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServiceError::bind(addr, e))?;

    let cors_status = if enable_cors { "enabled" } else { "disabled" };
    info!("Ready - listening on {} (CORS {})", addr, cors_status);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServiceError::http(e.to_string()))?;

    Ok(())
}

/// Health payload for `service`.
pub(crate) fn health_response(service: &str) -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": service,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let Json(body) = health_response("bridge");
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "bridge");
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_runner_keeps_config() {
        let runner = ServiceRunner::new(ServiceConfig::backend(8081));
        assert!(!runner.config().is_bridge());
    }

    #[tokio::test]
    async fn test_bind_failure() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap().to_string();
        let result = serve(&addr, Router::new(), false).await;
        assert!(matches!(result, Err(ServiceError::BindError { .. })));
    }

    #[tokio::test]
    async fn test_bridge_with_bad_backend_url_fails_to_start() {
        let config = ServiceConfig::bridge(0, "not a url");
        let result = ServiceRunner::new(config).run().await;
        assert!(matches!(result, Err(ServiceError::InitError(_))));
    }
}
