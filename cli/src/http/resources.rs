//! Cross-cutting resource listing

use coolify_api::models::Resource;

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List every application, database and service of the team
    pub async fn get_resources(&self) -> Result<Vec<Resource>, ClientError> {
        self.fetch_list("/resources").await
    }
}
