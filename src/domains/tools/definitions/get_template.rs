//! Get template tool definition.
//!
//! Fetches a letter template from the backend by id. The backend answers
//! every id, falling back to its generic appeal template for unknown ones.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::ToolDefinition;
use crate::domains::templates::openapi::template_schema;
use crate::domains::tools::{BackendClient, ToolError, ToolResult};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get_template tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTemplateParams {
    /// Template identifier, e.g. `TIMELY_FILING`.
    pub template_id: String,
}

impl GetTemplateParams {
    /// Extract the parameters from a request body.
    ///
    /// `template_id` must be a non-empty string.
    pub fn from_arguments(arguments: &Value) -> ToolResult<Self> {
        match arguments.get("template_id") {
            None | Some(Value::Null) => Err(ToolError::missing_argument("template_id")),
            Some(Value::String(id)) if id.is_empty() => {
                Err(ToolError::missing_argument("template_id"))
            }
            Some(Value::String(id)) => Ok(Self {
                template_id: id.clone(),
            }),
            Some(_) => Err(ToolError::invalid_argument(
                "template_id must be a string",
            )),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get template tool - fetches a letter template by id.
pub struct GetTemplateTool;

impl ToolDefinition for GetTemplateTool {
    const NAME: &'static str = "get_template";
    const DESCRIPTION: &'static str = "Fetch a template by ID";
    const SUMMARY: &'static str = "Fetch a letter template by ID";

    type Params = GetTemplateParams;

    fn result_schema() -> Value {
        template_schema()
    }
}

impl GetTemplateTool {
    /// Execute the tool: one lookup against the backend.
    #[instrument(skip_all, fields(template_id = %params.template_id))]
    pub async fn execute(params: &GetTemplateParams, client: &BackendClient) -> ToolResult<Value> {
        info!("get_template called: '{}'", params.template_id);
        client.get_template(&params.template_id).await
    }

    /// HTTP handler for this tool.
    pub async fn http_handler(arguments: Value, client: &BackendClient) -> ToolResult<Value> {
        let params = GetTemplateParams::from_arguments(&arguments)?;
        Self::execute(&params, client).await
    }
}

// ============================================================================
// Tests
// ============================================================================
