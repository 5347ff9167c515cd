//! Plugin manifest served at `/.well-known/ai-plugin.json`.

use serde::Serialize;

use crate::core::service::ManifestMode;
use crate::domains::tools::{ToolDescriptor, ToolRegistry};

const NAME_FOR_HUMAN: &str = "ReClaim Backend";
const NAME_FOR_MODEL: &str = "reclaim_backend";
const DESCRIPTION_FOR_MODEL: &str =
    "Fetches letter templates and saves appeal cases for ReClaim Assist.";
const SCHEMA_VERSION: &str = "v1";

/// Discovery manifest advertising the bridge and its tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginManifest {
    pub name_for_human: &'static str,
    pub name_for_model: &'static str,
    pub description_for_model: &'static str,
    pub schema_version: &'static str,

    /// Inline tool list (inline mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDescriptor>>,

    /// Pointer to the OpenAPI document (openapi mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiPointer>,
}

/// Reference to an API description document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiPointer {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub url: String,
}

impl PluginManifest {
    /// Build the manifest for the given mode.
    ///
    /// `public_url` is where clients reach the bridge; the OpenAPI pointer
    /// is resolved against it.
    pub fn new(mode: ManifestMode, public_url: &str) -> Self {
        let (tools, api) = match mode {
            ManifestMode::Inline => (Some(ToolRegistry::descriptors()), None),
            ManifestMode::OpenApi => (
                None,
                Some(ApiPointer {
                    kind: "openapi",
                    url: format!("{}/openapi.json", public_url.trim_end_matches('/')),
                }),
            ),
        };

        Self {
            name_for_human: NAME_FOR_HUMAN,
            name_for_model: NAME_FOR_MODEL,
            description_for_model: DESCRIPTION_FOR_MODEL,
            schema_version: SCHEMA_VERSION,
            tools,
            api,
        }
    }
}
