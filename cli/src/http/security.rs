//! SSH keys, GitHub apps and cloud provider tokens

use reqwest::Method;

use coolify_api::models::{CloudToken, CreateSshKeyInput, GitHubApp, SshKey};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List private keys
    pub async fn get_ssh_keys(&self) -> Result<Vec<SshKey>, ClientError> {
        self.fetch_list("/security/keys").await
    }

    /// Store a key pair
    pub async fn create_ssh_key(&self, input: &CreateSshKeyInput) -> Result<SshKey, ClientError> {
        let body = self.prepare(input)?;
        self.fetch(Method::POST, "/security/keys", Some(body)).await
    }

    /// Delete a key pair
    pub async fn delete_ssh_key(&self, uuid: &str) -> Result<(), ClientError> {
        let path = format!("/security/keys/{}", uuid);
        self.send(Method::DELETE, &path, None).await
    }

    pub async fn get_github_apps(&self) -> Result<Vec<GitHubApp>, ClientError> {
        self.fetch_list("/github-apps").await
    }

    pub async fn get_cloud_tokens(&self) -> Result<Vec<CloudToken>, ClientError> {
        self.fetch_list("/cloud-tokens").await
    }
}
