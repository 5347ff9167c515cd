//! Service layer.
//!
//! This module provides the two HTTP services:
//! - **Bridge**: discovery documents plus tool endpoints relayed to the backend
//! - **Backend**: template catalog and case id issuance
//!
//! A process runs exactly one of them, chosen by [`ServiceConfig`].

pub mod backend;
pub mod bridge;
mod config;
mod error;
mod runner;

pub use config::{BackendConfig, BridgeConfig, ManifestMode, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use runner::ServiceRunner;

/// Serialises tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
