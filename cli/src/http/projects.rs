//! Projects and their environments

use reqwest::Method;

use coolify_api::models::{
    CreateEnvironmentInput, CreateProjectInput, Environment, Project, UpdateProjectInput,
};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List projects
    pub async fn get_projects(&self) -> Result<Vec<Project>, ClientError> {
        self.fetch_list("/projects").await
    }

    /// Get a project
    pub async fn get_project(&self, uuid: &str) -> Result<Project, ClientError> {
        let path = format!("/projects/{}", uuid);
        self.fetch(Method::GET, &path, None).await
    }

    /// Create a project
    pub async fn create_project(&self, input: &CreateProjectInput) -> Result<Project, ClientError> {
        let body = self.prepare(input)?;
        self.fetch(Method::POST, "/projects", Some(body)).await
    }

    /// Update a project
    pub async fn update_project(
        &self,
        uuid: &str,
        input: &UpdateProjectInput,
    ) -> Result<Project, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/projects/{}", uuid);
        self.fetch(Method::PATCH, &path, Some(body)).await
    }

    /// Delete a project
    pub async fn delete_project(&self, uuid: &str) -> Result<(), ClientError> {
        let path = format!("/projects/{}", uuid);
        self.send(Method::DELETE, &path, None).await
    }

    /// List the environments of a project
    pub async fn get_environments(&self, project_uuid: &str) -> Result<Vec<Environment>, ClientError> {
        let path = format!("/projects/{}/environments", project_uuid);
        self.fetch_list(&path).await
    }

    /// Create an environment in a project
    pub async fn create_environment(
        &self,
        project_uuid: &str,
        input: &CreateEnvironmentInput,
    ) -> Result<Environment, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/projects/{}/environments", project_uuid);
        self.fetch(Method::POST, &path, Some(body)).await
    }

    /// Delete an environment by name
    pub async fn delete_environment(&self, project_uuid: &str, name: &str) -> Result<(), ClientError> {
        let path = format!("/projects/{}/environments/{}", project_uuid, name);
        self.send(Method::DELETE, &path, None).await
    }
}
