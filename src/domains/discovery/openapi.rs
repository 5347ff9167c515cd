//! OpenAPI document served by the bridge at `/openapi.json`.
//!
//! Generated from the tool registry: one `POST /mcp/{tool}` operation per
//! tool, with the tool's input schema as the request body.

use serde_json::{Map, Value, json};

use crate::domains::tools::{ToolDescriptor, ToolRegistry};

const TITLE: &str = "ReClaim MCP Bridge";
const VERSION: &str = "1.0.0";
const DESCRIPTION: &str =
    "Tool endpoints for fetching letter templates and saving appeal cases for ReClaim Assist";

/// Build the bridge OpenAPI document, advertising `public_url` as server.
pub fn bridge_openapi(public_url: &str) -> Value {
    let paths: Map<String, Value> = ToolRegistry::descriptors()
        .into_iter()
        .map(|tool| (format!("/mcp/{}", tool.name), tool_path_item(tool)))
        .collect();

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": TITLE,
            "version": VERSION,
            "description": DESCRIPTION
        },
        "servers": [{ "url": public_url }],
        "paths": paths,
        "components": {
            "schemas": {
                "Error": error_schema()
            }
        }
    })
}

fn tool_path_item(tool: ToolDescriptor) -> Value {
    json!({
        "post": {
            "operationId": tool.name,
            "summary": tool.summary,
            "description": tool.description,
            "requestBody": {
                "required": true,
                "content": {
                    "application/json": { "schema": tool.input_schema }
                }
            },
            "responses": {
                "200": {
                    "description": "Backend response",
                    "content": {
                        "application/json": {
                            "schema": {
                                "type": "object",
                                "properties": { "result": tool.result_schema }
                            }
                        }
                    }
                },
                "400": error_response("Invalid arguments"),
                "500": error_response("Backend failure")
            }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Error" }
            }
        }
    })
}

fn error_schema() -> Value {
    json!({
        "type": "object",
        "properties": { "error": { "type": "string" } },
        "required": ["error"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_both_tools() {
        let doc = bridge_openapi("https://bridge.test");
        assert_eq!(doc["openapi"], "3.0.0");
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains_key("/mcp/get_template"));
        assert!(paths.contains_key("/mcp/save_case"));
    }

    #[test]
    fn test_servers_use_public_url() {
        let doc = bridge_openapi("https://bridge.test");
        assert_eq!(doc["servers"][0]["url"], "https://bridge.test");
    }

    #[test]
    fn test_get_template_operation() {
        let doc = bridge_openapi("http://localhost:3000");
        let op = &doc["paths"]["/mcp/get_template"]["post"];
        assert_eq!(op["operationId"], "get_template");
        let body_schema = &op["requestBody"]["content"]["application/json"]["schema"];
        assert_eq!(body_schema["properties"]["template_id"]["type"], "string");
        let result = &op["responses"]["200"]["content"]["application/json"]["schema"]["properties"]
            ["result"];
        assert_eq!(result["properties"]["citations"]["type"], "array");
        assert!(op["responses"]["400"].is_object());
        assert!(op["responses"]["500"].is_object());
    }

    #[test]
    fn test_save_case_result_schema() {
        let doc = bridge_openapi("http://localhost:3000");
        let result = &doc["paths"]["/mcp/save_case"]["post"]["responses"]["200"]["content"]
            ["application/json"]["schema"]["properties"]["result"];
        assert_eq!(result["properties"]["case_id"]["type"], "string");
        assert_eq!(result["properties"]["status_url"]["type"], "string");
    }
}
