//! API models

mod entities;
mod enums;
mod inputs;

pub use entities::*;
pub use enums::*;
pub use inputs::*;

use crate::schema::registry;
use crate::schema::{Input, Model, Schema};

macro_rules! models {
    ($($ty:ty => $schema:path),+ $(,)?) => {
        $(
            impl Model for $ty {
                fn schema() -> &'static Schema {
                    &$schema
                }
            }
        )+
    };
}

macro_rules! inputs {
    (
        full { $($ty:ty => $schema:path),+ $(,)? }
        partial { $($pty:ty => $pschema:path),+ $(,)? }
    ) => {
        $(
            impl Input for $ty {
                fn schema() -> &'static Schema {
                    &$schema
                }
            }
        )+
        $(
            impl Input for $pty {
                fn schema() -> &'static Schema {
                    &$pschema
                }

                fn is_partial() -> bool {
                    true
                }
            }
        )+
    };
}

models! {
    HealthResponse => registry::HEALTH,
    VersionResponse => registry::VERSION,
    ApiErrorBody => registry::API_ERROR,
    TeamMember => registry::TEAM_MEMBER,
    Team => registry::TEAM,
    Project => registry::PROJECT,
    Environment => registry::ENVIRONMENT,
    Server => registry::SERVER,
    ServerValidation => registry::SERVER_VALIDATION,
    Application => registry::APPLICATION,
    ApplicationLogsResponse => registry::APPLICATION_LOGS_RESPONSE,
    Database => registry::DATABASE,
    Service => registry::SERVICE,
    Deployment => registry::DEPLOYMENT,
    EnvironmentVariable => registry::ENVIRONMENT_VARIABLE,
    BackupConfig => registry::BACKUP_CONFIG,
    BackupExecution => registry::BACKUP_EXECUTION,
    SshKey => registry::SSH_KEY,
    GitHubApp => registry::GITHUB_APP,
    CloudToken => registry::CLOUD_TOKEN,
    Resource => registry::RESOURCE,
}

inputs! {
    full {
        CreateProjectInput => registry::CREATE_PROJECT,
        CreateEnvironmentInput => registry::CREATE_ENVIRONMENT,
        CreateServerInput => registry::CREATE_SERVER,
        CreateApplicationInput => registry::CREATE_APPLICATION,
        CreatePublicApplicationInput => registry::CREATE_PUBLIC_APPLICATION,
        CreateDatabaseInput => registry::CREATE_DATABASE,
        UpdateResourceInput => registry::UPDATE_RESOURCE,
        CreateBackupInput => registry::CREATE_BACKUP,
        CreateServiceInput => registry::CREATE_SERVICE,
        CreateDeploymentInput => registry::CREATE_DEPLOYMENT,
        CreateEnvironmentVariableInput => registry::CREATE_ENVIRONMENT_VARIABLE,
        CreateSshKeyInput => registry::CREATE_SSH_KEY,
    }
    partial {
        UpdateProjectInput => registry::CREATE_PROJECT,
        UpdateServerInput => registry::CREATE_SERVER,
        UpdateApplicationInput => registry::CREATE_APPLICATION,
        UpdateEnvironmentVariableInput => registry::CREATE_ENVIRONMENT_VARIABLE,
    }
}
