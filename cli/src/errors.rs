//! Error types for the Coolify client

use coolify_api::models::ApiErrorBody;
use coolify_api::{Model, ValidationError};
use thiserror::Error;

/// Main error type for the Coolify client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Base URL or token missing, or the transport could not be built.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A create/update input failed its schema; nothing was sent.
    #[error("Validation error: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Anything that went wrong on or after the wire.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ClientError {
    /// HTTP status of a remote failure, when the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => err.status_code,
            _ => None,
        }
    }
}

/// Remote API failure: non-success status, broken response contract, or
/// transport failure. Only the first carries a status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
    pub code: Option<String>,
}

impl ApiError {
    /// Failure below HTTP: connect, TLS, timeout, unreadable body.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            code: None,
        }
    }

    /// A 2xx body that does not match its schema.
    pub fn contract(err: &ValidationError) -> Self {
        Self::transport(format!("Validation error: {err}"))
    }

    /// Build from a non-success response, falling back to `HTTP <status>`
    /// when the body is not an error envelope.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let envelope = serde_json::from_slice(body)
            .ok()
            .and_then(|value| ApiErrorBody::from_value(value).ok());

        match envelope {
            Some(ApiErrorBody { message, code }) if !message.is_empty() => Self {
                message,
                status_code: Some(status),
                code,
            },
            Some(ApiErrorBody { code, .. }) => Self {
                message: format!("HTTP {status}"),
                status_code: Some(status),
                code,
            },
            None => Self {
                message: format!("HTTP {status}"),
                status_code: Some(status),
                code: None,
            },
        }
    }
}
