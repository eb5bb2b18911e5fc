//! Wire entities returned by the API

use serde::{Deserialize, Serialize};

use super::enums::{BuildPack, DatabaseType, DeploymentStatus};

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}

/// Server version response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub members: Option<Vec<TeamMember>>,
}

/// A project; owns environments by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub uuid: String,
    pub name: String,
    pub description: Option<String>,
    pub team_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An environment, identified by (project uuid, name)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub name: String,
    pub project_uuid: String,
    pub is_production: Option<bool>,
    pub created_at: String,
}

/// A target host for deployments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub uuid: String,
    pub name: String,
    pub ip: String,
    pub port: Option<i64>,
    pub status: String,
    pub is_cloud: Option<bool>,
    pub is_local: Option<bool>,
    pub team_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Result of a server connectivity check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerValidation {
    pub valid: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub uuid: String,
    pub name: String,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub project_uuid: String,
    pub environment_name: String,
    pub status: String,
    pub build_pack: Option<BuildPack>,
    pub dockerfile: Option<String>,
    pub docker_image: Option<String>,
    pub team_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationLogs {
    pub logs: String,
}

/// `{"data": {"logs": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationLogsResponse {
    pub data: ApplicationLogs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub db_type: DatabaseType,
    pub version: Option<String>,
    pub project_uuid: String,
    pub environment_name: String,
    pub status: String,
    pub team_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub version: Option<String>,
    pub project_uuid: String,
    pub environment_name: String,
    pub status: String,
    pub team_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Tracked execution of a deploy, start, stop or restart.
///
/// Exactly one of the three owner uuids is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub uuid: String,
    pub application_uuid: Option<String>,
    pub database_uuid: Option<String>,
    pub service_uuid: Option<String>,
    pub status: DeploymentStatus,
    pub commit: Option<String>,
    pub branch: Option<String>,
    pub build_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub finished_at: Option<String>,
}

impl Deployment {
    /// Uuid of the application, database or service being deployed
    pub fn resource_uuid(&self) -> Option<&str> {
        self.application_uuid
            .as_deref()
            .or(self.database_uuid.as_deref())
            .or(self.service_uuid.as_deref())
    }
}

/// Variable attached to an application or service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentVariable {
    pub uuid: String,
    pub key: String,
    pub value: Option<String>,
    pub is_build_secret: Option<bool>,
    pub is_preview: Option<bool>,
    pub is_secret: Option<bool>,
    pub resource_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupConfig {
    pub uuid: String,
    pub enabled: bool,
    pub schedule: Option<String>,
    pub retention_days: Option<i64>,
    pub database_uuid: String,
    pub database_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupExecution {
    pub uuid: String,
    pub backup_id: String,
    pub status: String,
    /// Bytes; the server may report it as a float.
    pub size: Option<f64>,
    pub created_at: String,
    pub finished_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKey {
    pub uuid: String,
    pub name: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub team_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubApp {
    pub id: i64,
    pub name: String,
    pub app_id: String,
    pub installation_id: String,
    pub team_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudToken {
    pub uuid: String,
    pub name: String,
    pub provider: String,
    pub is_valid: bool,
    pub team_id: String,
    pub created_at: String,
}

/// Umbrella view over applications, databases and services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub uuid: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub status: String,
    pub project_uuid: Option<String>,
    pub environment_name: Option<String>,
}
