//! Discovery domain module.
//!
//! Static documents that let a tool-calling client find the bridge's tools:
//! the plugin manifest and the OpenAPI document. Both are derived from the
//! tool registry and depend on nothing but startup configuration.

mod manifest;
mod openapi;

pub use manifest::{ApiPointer, PluginManifest};
pub use openapi::bridge_openapi;
