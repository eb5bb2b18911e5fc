//! HTTP request executor

use reqwest::{header, Method};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use coolify_api::{Input, Model};

use crate::config::ClientConfig;
use crate::errors::{ApiError, ClientError};
use crate::http::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

/// Path prefix of every API route
pub const API_PREFIX: &str = "/api/v1";

const JSON: &str = "application/json";

/// Authenticated client for the Coolify API
pub struct HttpClient {
    transport: Box<dyn Transport>,
    base_url: String,
    token: SecretString,
}

impl HttpClient {
    /// Create a client backed by `reqwest`
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = match config.timeout {
            Some(timeout) => ReqwestTransport::with_timeout(timeout),
            None => ReqwestTransport::new(),
        }
        .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            base_url: config.base_url,
            token: config.token,
        }
    }

    /// Create a client from `COOLIFY_URL` and `COOLIFY_TOKEN`
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request and return the decoded JSON body.
    ///
    /// A 204 reply yields an empty object without reading the body.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let response = self.round_trip(method, path, body).await?;
        if response.status == 204 {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            warn!("Malformed JSON from {}: {}", path, e);
            ClientError::from(ApiError::transport(format!("Invalid JSON response: {}", e)))
        })
    }

    /// Perform one request and decode a single entity
    pub async fn fetch<T: Model>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let value = self.execute(method, path, body).await?;
        T::from_value(value).map_err(|e| {
            warn!("Response from {} does not match {}: {}", path, T::schema().name, e);
            ClientError::from(ApiError::contract(&e))
        })
    }

    /// GET a `{"data": [...]}` collection, in server order
    pub async fn fetch_list<T: Model>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let value = self.execute(Method::GET, path, None).await?;
        T::list_from_value(value).map_err(|e| {
            warn!("Response from {} does not match {}: {}", path, T::schema().name, e);
            ClientError::from(ApiError::contract(&e))
        })
    }

    /// Perform one request and discard the response body
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ClientError> {
        self.round_trip(method, path, body).await?;
        Ok(())
    }

    /// Check a request body locally, before anything is sent
    pub fn prepare<I: Input>(&self, input: &I) -> Result<Value, ClientError> {
        Ok(input.validated()?)
    }

    async fn round_trip(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        debug!("{} {}", method, url);

        let body = body
            .map(|value| serde_json::to_vec(&value))
            .transpose()
            .map_err(|e| ApiError::transport(format!("Failed to encode request body: {}", e)))?;

        let request = ApiRequest {
            method: method.clone(),
            url,
            headers: vec![
                (
                    header::AUTHORIZATION,
                    format!("Bearer {}", self.token.expose_secret()),
                ),
                (header::CONTENT_TYPE, JSON.to_string()),
                (header::ACCEPT, JSON.to_string()),
            ],
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            warn!("{} {} failed: {}", method, path, e);
            ApiError::transport(e.to_string())
        })?;

        debug!("{} {} -> {}", method, path, response.status);

        if !(200..300).contains(&response.status) {
            let err = ApiError::from_response(response.status, &response.body);
            warn!("HTTP {} {} failed: {} - {}", method, path, response.status, err.message);
            return Err(err.into());
        }

        Ok(response)
    }
}
