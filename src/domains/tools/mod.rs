//! Tools domain module.
//!
//! This module handles the tools the bridge exposes. Every tool is a single
//! pass-through call to the backend service; the bridge holds no state of
//! its own.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool descriptors and dispatch by name
//! - `client.rs` - HTTP client for the backend
//! - `error.rs` - Tool error types and their HTTP mapping

mod client;
pub mod definitions;
mod error;
mod registry;

pub use client::BackendClient;
pub use definitions::{ToolDefinition, ToolDescriptor, parse_arguments};
pub use error::{ToolError, ToolResult};
pub use registry::ToolRegistry;
