//! Save case tool definition.
//!
//! Forwards the caller's case payload to the backend verbatim. No field of
//! the payload is read or validated here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{info, instrument};

use super::ToolDefinition;
use crate::domains::tools::{BackendClient, ToolResult};

/// Parameters for the save_case tool: any JSON, passed through opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SaveCaseParams(#[schemars(with = "Map<String, Value>")] pub Value);

impl SaveCaseParams {
    /// Wrap a request body. Nothing is checked.
    pub fn from_arguments(arguments: Value) -> Self {
        Self(arguments)
    }
}

/// Save case tool - stores case information with the backend.
pub struct SaveCaseTool;

impl ToolDefinition for SaveCaseTool {
    const NAME: &'static str = "save_case";
    const DESCRIPTION: &'static str = "Save case information";
    const SUMMARY: &'static str = "Save an appeal case";

    type Params = SaveCaseParams;

    fn result_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "case_id": { "type": "string" },
                "status_url": { "type": "string" }
            }
        })
    }
}

impl SaveCaseTool {
    /// Execute the tool: forward the payload to the backend.
    #[instrument(skip_all)]
    pub async fn execute(params: &SaveCaseParams, client: &BackendClient) -> ToolResult<Value> {
        info!("save_case called");
        client.save_case(&params.0).await
    }

    /// HTTP handler for this tool.
    pub async fn http_handler(arguments: Value, client: &BackendClient) -> ToolResult<Value> {
        let params = SaveCaseParams::from_arguments(arguments);
        Self::execute(&params, client).await
    }
}
