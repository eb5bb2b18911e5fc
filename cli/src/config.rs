//! Client configuration

use std::env;
use std::time::Duration;

use secrecy::SecretString;

use crate::errors::ClientError;

/// Environment variable holding the instance base URL
pub const URL_ENV: &str = "COOLIFY_URL";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "COOLIFY_TOKEN";

/// Connection settings, fixed for the lifetime of a client
#[derive(Debug)]
pub struct ClientConfig {
    /// Instance base URL, without trailing slash
    pub base_url: String,

    /// Bearer token
    pub token: SecretString,

    /// Optional request timeout applied by the transport
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration from explicit values
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        let token = token.into();

        if base_url.trim().is_empty() {
            return Err(ClientError::Config(format!("{URL_ENV} is required")));
        }
        if token.trim().is_empty() {
            return Err(ClientError::Config(format!("{TOKEN_ENV} is required")));
        }

        let base_url = match base_url.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => base_url,
        };

        Ok(Self {
            base_url,
            token: SecretString::from(token),
            timeout: None,
        })
    }

    /// Use explicit values where given, the environment otherwise
    pub fn resolve(base_url: Option<String>, token: Option<String>) -> Result<Self, ClientError> {
        let base_url = base_url
            .filter(|s| !s.is_empty())
            .or_else(|| env::var(URL_ENV).ok().filter(|s| !s.is_empty()));
        let token = token
            .filter(|s| !s.is_empty())
            .or_else(|| env::var(TOKEN_ENV).ok().filter(|s| !s.is_empty()));

        match (base_url, token) {
            (Some(base_url), Some(token)) => Self::new(base_url, token),
            _ => Err(ClientError::Config(format!(
                "{URL_ENV} and {TOKEN_ENV} must be set either via parameters or environment variables"
            ))),
        }
    }

    /// Read both values from the environment
    pub fn from_env() -> Result<Self, ClientError> {
        Self::resolve(None, None)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
