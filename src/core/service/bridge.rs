//! Bridge service.
//!
//! Serves the discovery documents and relays tool calls to the backend.
//! Successful calls answer `{ "result": <backend body> }`; failures answer
//! `{ "error": <message> }` with the status the [`ToolError`] maps to.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::BridgeConfig;
use super::runner::{health_response, serve};
use super::{ServiceError, ServiceResult};
use crate::domains::discovery::{PluginManifest, bridge_openapi};
use crate::domains::tools::{BackendClient, ToolError, ToolRegistry, parse_arguments};

const LIVENESS_MESSAGE: &str = "ReClaim MCP bridge is running";

/// Envelope for a successful tool call.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResponse {
    pub result: Value,
}

/// State shared across bridge handlers. Everything is immutable.
#[derive(Clone)]
pub struct BridgeState {
    registry: ToolRegistry,
    manifest: Arc<PluginManifest>,
    openapi: Arc<Value>,
}

impl BridgeState {
    /// Build the state from configuration.
    ///
    /// Fails if the backend URL is not a usable absolute URL.
    pub fn from_config(config: &BridgeConfig) -> ServiceResult<Self> {
        let client = BackendClient::new(&config.backend_url).map_err(ServiceError::init)?;
        Ok(Self {
            registry: ToolRegistry::new(client),
            manifest: Arc::new(PluginManifest::new(config.manifest_mode, &config.public_url)),
            openapi: Arc::new(bridge_openapi(&config.public_url)),
        })
    }
}

/// Build the bridge router.
pub fn router(state: BridgeState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/.well-known/ai-plugin.json", get(manifest_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/mcp/{tool_name}", post(handle_tool_call))
        .with_state(state)
}

/// Bridge service handler.
pub struct BridgeServer {
    config: BridgeConfig,
}

impl BridgeServer {
    /// Create a new bridge server with the given config.
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the bridge until the listener fails.
    pub async fn run(self) -> ServiceResult<()> {
        let state = BridgeState::from_config(&self.config)?;
        let app = router(state);

        info!("  → Manifest: GET /.well-known/ai-plugin.json");
        info!("  → OpenAPI:  GET /openapi.json");
        for name in ToolRegistry::tool_names() {
            info!("  → Tool:     POST /mcp/{}", name);
        }
        info!("  → Backend:  {}", self.config.backend_url);

        serve(&self.address(), app, self.config.enable_cors).await
    }
}

/// Liveness acknowledgment.
async fn root_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    health_response("bridge")
}

/// Discovery manifest.
async fn manifest_handler(State(state): State<BridgeState>) -> Json<PluginManifest> {
    Json(state.manifest.as_ref().clone())
}

/// OpenAPI document.
async fn openapi_handler(State(state): State<BridgeState>) -> Json<Value> {
    Json(state.openapi.as_ref().clone())
}

/// Handle a tool call.
#[instrument(skip(state, body))]
async fn handle_tool_call(
    State(state): State<BridgeState>,
    Path(tool_name): Path<String>,
    body: Bytes,
) -> Result<Json<ToolResponse>, ToolError> {
    if !ToolRegistry::tool_names().contains(&tool_name.as_str()) {
        return Err(ToolError::not_found(tool_name));
    }

    let arguments = parse_arguments(&body)?;
    let result = state.registry.call_tool(&tool_name, arguments).await?;

    Ok(Json(ToolResponse { result }))
}
