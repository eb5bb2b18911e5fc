//! Databases and their backups

use reqwest::Method;

use coolify_api::models::{
    BackupConfig, BackupExecution, CreateBackupInput, CreateDatabaseInput, Database, DatabaseType,
    UpdateResourceInput,
};

use crate::errors::ClientError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List databases
    pub async fn get_databases(&self) -> Result<Vec<Database>, ClientError> {
        self.fetch_list("/databases").await
    }

    /// Get a database
    pub async fn get_database(&self, uuid: &str) -> Result<Database, ClientError> {
        let path = format!("/databases/{}", uuid);
        self.fetch(Method::GET, &path, None).await
    }

    /// Create a database of the given engine
    pub async fn create_database(
        &self,
        db_type: DatabaseType,
        input: &CreateDatabaseInput,
    ) -> Result<Database, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/databases/{}", db_type);
        self.fetch(Method::POST, &path, Some(body)).await
    }

    /// Update a database
    pub async fn update_database(
        &self,
        uuid: &str,
        input: &UpdateResourceInput,
    ) -> Result<Database, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/databases/{}", uuid);
        self.fetch(Method::PATCH, &path, Some(body)).await
    }

    /// Delete a database
    pub async fn delete_database(&self, uuid: &str) -> Result<(), ClientError> {
        let path = format!("/databases/{}", uuid);
        self.send(Method::DELETE, &path, None).await
    }

    /// Start a database
    pub async fn start_database(&self, uuid: &str) -> Result<Database, ClientError> {
        self.database_action(uuid, "start").await
    }

    /// Stop a database
    pub async fn stop_database(&self, uuid: &str) -> Result<Database, ClientError> {
        self.database_action(uuid, "stop").await
    }

    /// Restart a database
    pub async fn restart_database(&self, uuid: &str) -> Result<Database, ClientError> {
        self.database_action(uuid, "restart").await
    }

    /// List backup schedules of a database
    pub async fn get_database_backups(&self, uuid: &str) -> Result<Vec<BackupConfig>, ClientError> {
        let path = format!("/databases/{}/backups", uuid);
        self.fetch_list(&path).await
    }

    /// Add a backup schedule to a database
    pub async fn create_database_backup(
        &self,
        uuid: &str,
        input: &CreateBackupInput,
    ) -> Result<BackupConfig, ClientError> {
        let body = self.prepare(input)?;
        let path = format!("/databases/{}/backups", uuid);
        self.fetch(Method::POST, &path, Some(body)).await
    }

    /// List runs of a backup schedule
    pub async fn get_backup_executions(
        &self,
        uuid: &str,
        backup_uuid: &str,
    ) -> Result<Vec<BackupExecution>, ClientError> {
        let path = format!("/databases/{}/backups/{}/executions", uuid, backup_uuid);
        self.fetch_list(&path).await
    }

    async fn database_action(&self, uuid: &str, action: &str) -> Result<Database, ClientError> {
        let path = format!("/databases/{}/{}", uuid, action);
        self.fetch(Method::POST, &path, None).await
    }
}
