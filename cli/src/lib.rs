//! coolctl - typed client and command line for the Coolify API
//!
//! The [`http::HttpClient`] wraps every remote operation; request and
//! response payloads are checked against the schemas in `coolify_api`.

pub mod commands;
pub mod config;
pub mod errors;
pub mod http;
pub mod logs;

pub use config::ClientConfig;
pub use errors::{ApiError, ClientError};
pub use http::HttpClient;
