//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of tool descriptors used by the manifest and OpenAPI document
//! - HTTP dispatch of a tool call by name

use serde_json::Value;
use tracing::warn;

use super::client::BackendClient;
use super::definitions::{GetTemplateTool, SaveCaseTool, ToolDefinition, ToolDescriptor};
use super::error::{ToolError, ToolResult};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - dispatches tool calls to the backend client.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: BackendClient,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `client`.
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![GetTemplateTool::NAME, SaveCaseTool::NAME]
    }

    /// Get all tool descriptors.
    ///
    /// This is the single source of truth for tool metadata; both discovery
    /// documents are built from it.
    pub fn descriptors() -> Vec<ToolDescriptor> {
        vec![GetTemplateTool::descriptor(), SaveCaseTool::descriptor()]
    }

    /// Backend client used for tool calls.
    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolResult<Value> {
        match name {
            n if n == GetTemplateTool::NAME => {
                GetTemplateTool::http_handler(arguments, &self.client).await
            }
            n if n == SaveCaseTool::NAME => {
                SaveCaseTool::http_handler(arguments, &self.client).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
