//! Coolify API models
//!
//! Wire entities, request inputs and the declarative schemas that guard both
//! directions of every call.

pub mod models;
pub mod schema;

pub use schema::{Input, Model, ValidationError, Violation};
