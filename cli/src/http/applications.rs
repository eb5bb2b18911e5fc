//! Applications, their logs and environment variables

use reqwest::Method;

use coolify_api::models::{
    Application, ApplicationLogsResponse, CreateApplicationInput, CreateEnvironmentVariableInput,
    CreatePublicApplicationInput, Deployment, EnvironmentVariable, UpdateApplicationInput,
    UpdateEnvironmentVariableInput,
};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List applications
    pub async fn get_applications(&self) -> Result<Vec<Application>, ClientError> {
        self.fetch_list("/applications").await
    }

    /// Get an application
    pub async fn get_application(&self, uuid: &str) -> Result<Application, ClientError> {
        let path = format!("/applications/{}", uuid);
        self.fetch(Method::GET, &path, None).await
    }

    /// Create an application
    pub async fn create_application(
        &self,
        input: &CreateApplicationInput,
    ) -> Result<Application, ClientError> {
        let body = self.prepare(input)?;
        self.fetch(Method::POST, "/applications", Some(body)).await
    }

    /// Create an application from a public git repository
    pub async fn create_public_application(
        &self,
        input: &CreatePublicApplicationInput,
    ) -> Result<Application, ClientError> {
        let body = self.prepare(input)?;
        self.fetch(Method::POST, "/applications/public", Some(body)).await
    }

    /// Update an application
    pub async fn update_application(
        &self,
        uuid: &str,
        input: &UpdateApplicationInput,
    ) -> Result<Application, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/applications/{}", uuid);
        self.fetch(Method::PATCH, &path, Some(body)).await
    }

    /// Delete an application
    pub async fn delete_application(&self, uuid: &str) -> Result<(), ClientError> {
        let path = format!("/applications/{}", uuid);
        self.send(Method::DELETE, &path, None).await
    }

    /// Start an application, returning the queued deployment
    pub async fn start_application(&self, uuid: &str) -> Result<Deployment, ClientError> {
        self.application_action(uuid, "start").await
    }

    /// Stop an application
    pub async fn stop_application(&self, uuid: &str) -> Result<Deployment, ClientError> {
        self.application_action(uuid, "stop").await
    }

    /// Restart an application
    pub async fn restart_application(&self, uuid: &str) -> Result<Deployment, ClientError> {
        self.application_action(uuid, "restart").await
    }

    /// Get the current container logs of an application
    pub async fn get_application_logs(&self, uuid: &str) -> Result<String, ClientError> {
        let path = format!("/applications/{}/logs", uuid);
        let response: ApplicationLogsResponse = self.fetch(Method::GET, &path, None).await?;
        Ok(response.data.logs)
    }

    /// List the environment variables of an application
    pub async fn get_application_env_vars(
        &self,
        uuid: &str,
    ) -> Result<Vec<EnvironmentVariable>, ClientError> {
        let path = format!("/applications/{}/envs", uuid);
        self.fetch_list(&path).await
    }

    /// Add an environment variable to an application
    pub async fn create_application_env_var(
        &self,
        uuid: &str,
        input: &CreateEnvironmentVariableInput,
    ) -> Result<EnvironmentVariable, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/applications/{}/envs", uuid);
        self.fetch(Method::POST, &path, Some(body)).await
    }

    /// Update an environment variable of an application
    pub async fn update_application_env_var(
        &self,
        uuid: &str,
        env_uuid: &str,
        input: &UpdateEnvironmentVariableInput,
    ) -> Result<EnvironmentVariable, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/applications/{}/envs/{}", uuid, env_uuid);
        self.fetch(Method::PATCH, &path, Some(body)).await
    }

    /// Remove an environment variable from an application
    pub async fn delete_application_env_var(
        &self,
        uuid: &str,
        env_uuid: &str,
    ) -> Result<(), ClientError> {
        let path = format!("/applications/{}/envs/{}", uuid, env_uuid);
        self.send(Method::DELETE, &path, None).await
    }

    async fn application_action(&self, uuid: &str, action: &str) -> Result<Deployment, ClientError> {
        let path = format!("/applications/{}/{}", uuid, action);
        self.fetch(Method::POST, &path, None).await
    }
}
