//! Servers

use reqwest::Method;

use coolify_api::models::{CreateServerInput, Server, ServerValidation, UpdateServerInput};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List servers
    pub async fn get_servers(&self) -> Result<Vec<Server>, ClientError> {
        self.fetch_list("/servers").await
    }

    /// Get a server
    pub async fn get_server(&self, uuid: &str) -> Result<Server, ClientError> {
        let path = format!("/servers/{}", uuid);
        self.fetch(Method::GET, &path, None).await
    }

    /// Register a server
    pub async fn create_server(&self, input: &CreateServerInput) -> Result<Server, ClientError> {
        let body = self.prepare(input)?;
        self.fetch(Method::POST, "/servers", Some(body)).await
    }

    /// Update a server
    pub async fn update_server(
        &self,
        uuid: &str,
        input: &UpdateServerInput,
    ) -> Result<Server, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/servers/{}", uuid);
        self.fetch(Method::PATCH, &path, Some(body)).await
    }

    /// Remove a server
    pub async fn delete_server(&self, uuid: &str) -> Result<(), ClientError> {
        let path = format!("/servers/{}", uuid);
        self.send(Method::DELETE, &path, None).await
    }

    /// Ask the instance to check connectivity to a server
    pub async fn validate_server(&self, uuid: &str) -> Result<ServerValidation, ClientError> {
        let path = format!("/servers/{}/validate", uuid);
        self.fetch(Method::GET, &path, None).await
    }
}
