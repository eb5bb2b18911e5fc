//! One-click services

use reqwest::Method;

use coolify_api::models::{
    CreateEnvironmentVariableInput, CreateServiceInput, EnvironmentVariable, Service,
    UpdateResourceInput,
};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List services
    pub async fn get_services(&self) -> Result<Vec<Service>, ClientError> {
        self.fetch_list("/services").await
    }

    /// Get a service
    pub async fn get_service(&self, uuid: &str) -> Result<Service, ClientError> {
        let path = format!("/services/{}", uuid);
        self.fetch(Method::GET, &path, None).await
    }

    /// Create a service
    pub async fn create_service(&self, input: &CreateServiceInput) -> Result<Service, ClientError> {
        let body = self.prepare(input)?;
        self.fetch(Method::POST, "/services", Some(body)).await
    }

    /// Update a service
    pub async fn update_service(
        &self,
        uuid: &str,
        input: &UpdateResourceInput,
    ) -> Result<Service, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/services/{}", uuid);
        self.fetch(Method::PATCH, &path, Some(body)).await
    }

    /// Delete a service
    pub async fn delete_service(&self, uuid: &str) -> Result<(), ClientError> {
        let path = format!("/services/{}", uuid);
        self.send(Method::DELETE, &path, None).await
    }

    pub async fn start_service(&self, uuid: &str) -> Result<Service, ClientError> {
        self.service_action(uuid, "start").await
    }

    pub async fn stop_service(&self, uuid: &str) -> Result<Service, ClientError> {
        self.service_action(uuid, "stop").await
    }

    pub async fn restart_service(&self, uuid: &str) -> Result<Service, ClientError> {
        self.service_action(uuid, "restart").await
    }

    /// List the environment variables of a service
    pub async fn get_service_env_vars(
        &self,
        uuid: &str,
    ) -> Result<Vec<EnvironmentVariable>, ClientError> {
        let path = format!("/services/{}/envs", uuid);
        self.fetch_list(&path).await
    }

    /// Add an environment variable to a service
    pub async fn create_service_env_var(
        &self,
        uuid: &str,
        input: &CreateEnvironmentVariableInput,
    ) -> Result<EnvironmentVariable, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/services/{}/envs", uuid);
        self.fetch(Method::POST, &path, Some(body)).await
    }

    async fn service_action(&self, uuid: &str, action: &str) -> Result<Service, ClientError> {
        let path = format!("/services/{}/{}", uuid, action);
        self.fetch(Method::POST, &path, None).await
    }
}
