//! ReClaim Assist tool bridge and backend.
//!
//! This crate provides two small HTTP services:
//!
//! - a **bridge** that advertises callable tools (`get_template`,
//!   `save_case`) through a plugin manifest and an OpenAPI document, and
//!   relays each tool call to the backend;
//! - a **backend** that owns an in-memory template catalog and issues case
//!   identifiers.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, and the service layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool definitions, registry, and the backend client
//!   - **discovery**: Manifest and bridge OpenAPI document
//!   - **templates**: Template catalog
//!   - **cases**: Case id issuance
//!
//! # Example
//!
//! ```rust,no_run
//! use reclaim_mcp_bridge::core::{Config, ServiceRunner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     ServiceRunner::new(config.service).run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ServiceRunner};
