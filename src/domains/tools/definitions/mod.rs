//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A typed parameters struct (its JSON schema is the tool's input schema)
//! - `from_arguments()` to pull those parameters out of a request body
//! - `execute()` which performs the backend call
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod get_template;
pub mod save_case;

pub use get_template::{GetTemplateParams, GetTemplateTool};
pub use save_case::{SaveCaseParams, SaveCaseTool};

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

/// Trait for tool definitions.
///
/// Provides the static metadata advertised in the manifest and OpenAPI
/// document.
pub trait ToolDefinition {
    /// Tool name, also the last path segment of its `/mcp/{name}` endpoint.
    const NAME: &'static str;

    /// Description shown to clients.
    const DESCRIPTION: &'static str;

    /// OpenAPI summary for the tool's endpoint.
    const SUMMARY: &'static str;

    /// Parameters type the input schema is derived from.
    type Params: JsonSchema;

    /// JSON schema of the tool input.
    fn input_schema() -> Value {
        schema_for_params::<Self::Params>()
    }

    /// JSON schema of the backend body returned under `result`.
    fn result_schema() -> Value;

    /// Descriptor for discovery documents.
    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            summary: Self::SUMMARY,
            input_schema: Self::input_schema(),
            result_schema: Self::result_schema(),
        }
    }
}

/// Static metadata of a tool, as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    /// Tool name.
    pub name: &'static str,

    /// Description shown to clients.
    pub description: &'static str,

    /// OpenAPI summary; not part of the manifest entry.
    #[serde(skip)]
    pub summary: &'static str,

    /// JSON schema of the tool input.
    pub input_schema: Value,

    /// JSON schema of the tool result; only documented in OpenAPI.
    #[serde(skip)]
    pub result_schema: Value,
}

/// Generate a plain JSON schema for `T`.
///
/// The draft marker and title added by the generator are dropped so the
/// schema embeds cleanly in an OpenAPI 3.0 document.
fn schema_for_params<T: JsonSchema>() -> Value {
    let mut schema = Value::from(schemars::schema_for!(T));
    if let Value::Object(map) = &mut schema {
        map.remove("$schema");
        map.remove("title");
    }
    schema
}

/// Parse a raw request body into JSON. An empty body counts as `{}`.
pub fn parse_arguments(body: &[u8]) -> Result<Value, super::ToolError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| super::ToolError::InvalidBody(e.to_string()))
}
