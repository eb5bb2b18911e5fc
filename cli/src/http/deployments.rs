//! Deployments

use reqwest::Method;

use coolify_api::models::{CreateDeploymentInput, Deployment};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List deployments
    pub async fn get_deployments(&self) -> Result<Vec<Deployment>, ClientError> {
        self.fetch_list("/deployments").await
    }

    /// Get a deployment
    pub async fn get_deployment(&self, uuid: &str) -> Result<Deployment, ClientError> {
        let path = format!("/deployments/{}", uuid);
        self.fetch(Method::GET, &path, None).await
    }

    /// Deployment history of an application
    pub async fn get_application_deployments(
        &self,
        application_uuid: &str,
    ) -> Result<Vec<Deployment>, ClientError> {
        let path = format!("/deployments/applications/{}", application_uuid);
        self.fetch_list(&path).await
    }

    /// Cancel a queued or running deployment
    pub async fn cancel_deployment(&self, uuid: &str) -> Result<Deployment, ClientError> {
        let path = format!("/deployments/{}/cancel", uuid);
        self.fetch(Method::POST, &path, None).await
    }

    /// Trigger a deployment. The server dispatches on `resourceType`.
    pub async fn deploy(&self, input: &CreateDeploymentInput) -> Result<Deployment, ClientError> {
        let body = self.prepare(input)?;
        self.fetch(Method::POST, "/deploy", Some(body)).await
    }
}
