//! Core module containing shared infrastructure components.
//!
//! This module provides configuration, error handling, and the service layer
//! that exposes the domains over HTTP.

pub mod config;
pub mod error;
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
pub use service::{ServiceConfig, ServiceRunner};
