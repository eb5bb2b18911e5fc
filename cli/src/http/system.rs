//! Instance health, version and teams

use reqwest::Method;

use coolify_api::models::{HealthResponse, Team, VersionResponse};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// Check instance health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.fetch(Method::GET, "/health", None).await
    }

    /// Get the instance version
    pub async fn version(&self) -> Result<VersionResponse, ClientError> {
        self.fetch(Method::GET, "/version", None).await
    }

    /// List teams visible to the token
    pub async fn get_teams(&self) -> Result<Vec<Team>, ClientError> {
        self.fetch_list("/teams").await
    }

    /// Get the team the token belongs to
    pub async fn get_current_team(&self) -> Result<Team, ClientError> {
        self.fetch(Method::GET, "/teams/current", None).await
    }
}
