//! OpenAPI document served by the backend.
//!
//! Only the template lookup is documented; `/cases` is reached through the
//! bridge's `save_case` tool.

use serde_json::{Value, json};

/// Build the backend OpenAPI document.
pub fn backend_openapi() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "ReClaim Backend API",
            "version": "1.0.0",
            "description": "Provides template retrieval and related backend services for ReClaim Assist"
        },
        "paths": {
            "/templates/{template_id}": {
                "get": {
                    "summary": "Get a letter template by ID",
                    "parameters": [
                        {
                            "name": "template_id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Template details",
                            "content": {
                                "application/json": {
                                    "schema": template_schema()
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// JSON schema of a template record.
pub fn template_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "template_body": { "type": "string" },
            "citations": {
                "type": "array",
                "items": { "type": "string" }
            }
        }
    })
}
