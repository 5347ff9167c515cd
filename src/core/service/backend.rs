//! Backend service.
//!
//! Owns the template catalog and issues case ids. Every endpoint is total:
//! unknown template ids resolve to the fallback template, and case creation
//! accepts any body without reading it.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::ServiceResult;
use super::config::BackendConfig;
use super::runner::{health_response, serve};
use crate::domains::cases::CaseReceipt;
use crate::domains::templates::{Template, TemplateCatalog, openapi::backend_openapi};

/// State shared across backend handlers. Everything is immutable.
#[derive(Clone)]
pub struct BackendState {
    catalog: Arc<TemplateCatalog>,
    status_url_prefix: Arc<str>,
    openapi: Arc<Value>,
    body_limit: usize,
}

impl BackendState {
    /// Build the state with the built-in catalog.
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::with_catalog(config, TemplateCatalog::builtin())
    }

    /// Build the state around a specific catalog.
    pub fn with_catalog(config: &BackendConfig, catalog: TemplateCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            status_url_prefix: Arc::from(config.status_url_prefix.as_str()),
            openapi: Arc::new(backend_openapi()),
            body_limit: config.body_limit,
        }
    }
}

/// Build the backend router.
pub fn router(state: BackendState) -> Router {
    let body_limit = state.body_limit;
    Router::new()
        .route("/health", get(health_check))
        .route("/templates/{template_id}", get(get_template))
        .route("/cases", post(create_case))
        .route("/openapi.json", get(openapi_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Backend service handler.
pub struct BackendServer {
    config: BackendConfig,
}

impl BackendServer {
    /// Create a new backend server with the given config.
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the backend until the listener fails.
    pub async fn run(self) -> ServiceResult<()> {
        let state = BackendState::from_config(&self.config);
        info!(
            "Template catalog loaded: {} templates ({})",
            state.catalog.len(),
            state.catalog.ids().join(", ")
        );
        let app = router(state);

        info!("  → Templates: GET /templates/{{template_id}}");
        info!("  → Cases:     POST /cases");
        info!("  → OpenAPI:   GET /openapi.json");

        serve(&self.address(), app, self.config.enable_cors).await
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    health_response("backend")
}

/// Look up a template; unknown ids get the fallback.
#[instrument(skip(state))]
async fn get_template(
    State(state): State<BackendState>,
    Path(template_id): Path<String>,
) -> Json<Template> {
    if state.catalog.get(&template_id).is_none() {
        debug!("Unknown template '{}', serving {}", template_id, state.catalog.fallback_id());
    }
    Json(state.catalog.resolve(&template_id).clone())
}

/// Issue a case id. The body is accepted but neither parsed nor kept.
#[instrument(skip_all)]
async fn create_case(State(state): State<BackendState>, body: Bytes) -> Json<CaseReceipt> {
    let receipt = CaseReceipt::issue(&state.status_url_prefix);
    info!("Case {} created ({} byte payload)", receipt.case_id, body.len());
    Json(receipt)
}

/// OpenAPI document.
async fn openapi_handler(State(state): State<BackendState>) -> Json<Value> {
    Json(state.openapi.as_ref().clone())
}
