//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools** and **discovery** make up the bridge: tool dispatch to the
//!   backend and the documents advertising those tools.
//! - **templates** and **cases** make up the backend: the template catalog
//!   and case id issuance.

pub mod cases;
pub mod discovery;
pub mod templates;
pub mod tools;
