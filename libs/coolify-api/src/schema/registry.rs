//! Schema registry
//!
//! One static per wire entity and per request input. Field names are the
//! camelCase names used on the wire.

use super::{Constraint, Field, Kind, Rule, Schema};

const STRING: Kind = Kind::String;
const INTEGER: Kind = Kind::Integer;
const NUMBER: Kind = Kind::Number;
const BOOLEAN: Kind = Kind::Boolean;

const NON_EMPTY: &[Constraint] = &[Constraint::MinLength(1)];

pub const DATABASE_TYPES: &[&str] = &[
    "postgresql",
    "mysql",
    "mariadb",
    "mongodb",
    "redis",
    "clickhouse",
    "dragonfly",
    "keydb",
];

pub const DEPLOYMENT_STATUSES: &[&str] = &["waiting", "running", "failed", "done", "cancelled"];

pub const BUILD_PACKS: &[&str] = &["nixpacks", "dockerfile", "dockerimage", "static"];

pub const RESOURCE_TYPES: &[&str] = &["application", "database", "service"];

// System

pub static HEALTH: Schema = Schema {
    name: "HealthResponse",
    fields: &[
        Field::required("status", STRING),
        Field::optional("version", STRING),
    ],
    rules: &[],
};

pub static VERSION: Schema = Schema {
    name: "VersionResponse",
    fields: &[Field::required("version", STRING)],
    rules: &[],
};

pub static API_ERROR: Schema = Schema {
    name: "ApiError",
    fields: &[
        Field::required("message", STRING),
        Field::nullable("code", STRING),
    ],
    rules: &[],
};

// Teams

pub static TEAM_MEMBER: Schema = Schema {
    name: "TeamMember",
    fields: &[
        Field::required("id", STRING),
        Field::required("email", STRING),
        Field::optional("name", STRING),
        Field::required("role", STRING),
    ],
    rules: &[],
};

pub static TEAM: Schema = Schema {
    name: "Team",
    fields: &[
        Field::required("id", STRING),
        Field::required("name", STRING),
        Field::optional("members", Kind::List(&TEAM_MEMBER)),
    ],
    rules: &[],
};

// Projects

pub static PROJECT: Schema = Schema {
    name: "Project",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("name", STRING),
        Field::nullable("description", STRING),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
        Field::required("updatedAt", STRING),
    ],
    rules: &[],
};

pub static ENVIRONMENT: Schema = Schema {
    name: "Environment",
    fields: &[
        Field::required("name", STRING),
        Field::required("projectUuid", STRING),
        Field::optional("isProduction", BOOLEAN),
        Field::required("createdAt", STRING),
    ],
    rules: &[],
};

pub static CREATE_PROJECT: Schema = Schema {
    name: "CreateProjectInput",
    fields: &[
        Field::required("name", STRING).with(NON_EMPTY),
        Field::optional("description", STRING),
    ],
    rules: &[],
};

pub static CREATE_ENVIRONMENT: Schema = Schema {
    name: "CreateEnvironmentInput",
    fields: &[
        Field::required("name", STRING).with(NON_EMPTY),
        Field::optional("isProduction", BOOLEAN),
    ],
    rules: &[],
};

// Servers

pub static SERVER: Schema = Schema {
    name: "Server",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("name", STRING),
        Field::required("ip", STRING),
        Field::optional("port", INTEGER),
        Field::required("status", STRING),
        Field::optional("isCloud", BOOLEAN),
        Field::optional("isLocal", BOOLEAN),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
        Field::required("updatedAt", STRING),
    ],
    rules: &[],
};

pub static SERVER_VALIDATION: Schema = Schema {
    name: "ServerValidation",
    fields: &[
        Field::required("valid", BOOLEAN),
        Field::required("message", STRING),
    ],
    rules: &[],
};

pub static CREATE_SERVER: Schema = Schema {
    name: "CreateServerInput",
    fields: &[
        Field::required("name", STRING).with(NON_EMPTY),
        Field::required("ip", STRING).with(&[Constraint::IpAddr]),
        Field::optional("port", INTEGER).with(&[Constraint::Range { min: 1, max: 65535 }]),
    ],
    rules: &[],
};

// Applications

pub static APPLICATION: Schema = Schema {
    name: "Application",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("name", STRING),
        Field::nullable("repository", STRING),
        Field::nullable("branch", STRING),
        Field::required("projectUuid", STRING),
        Field::required("environmentName", STRING),
        Field::required("status", STRING),
        Field::nullable("buildPack", Kind::Enum(BUILD_PACKS)),
        Field::nullable("dockerfile", STRING),
        Field::nullable("dockerImage", STRING),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
        Field::required("updatedAt", STRING),
    ],
    rules: &[],
};

pub static APPLICATION_LOGS: Schema = Schema {
    name: "ApplicationLogs",
    fields: &[Field::required("logs", STRING)],
    rules: &[],
};

pub static APPLICATION_LOGS_RESPONSE: Schema = Schema {
    name: "ApplicationLogsResponse",
    fields: &[Field::required("data", Kind::Object(&APPLICATION_LOGS))],
    rules: &[],
};

pub static CREATE_APPLICATION: Schema = Schema {
    name: "CreateApplicationInput",
    fields: &[
        Field::required("projectUuid", STRING),
        Field::required("environmentName", STRING),
        Field::required("name", STRING).with(NON_EMPTY),
        Field::optional("buildPack", Kind::Enum(BUILD_PACKS)),
        Field::optional("repository", STRING),
        Field::optional("branch", STRING),
    ],
    rules: &[],
};

pub static CREATE_PUBLIC_APPLICATION: Schema = Schema {
    name: "CreatePublicApplicationInput",
    fields: &[
        Field::required("projectUuid", STRING),
        Field::required("environmentName", STRING),
        Field::required("name", STRING).with(NON_EMPTY),
        Field::required("repository", STRING).with(NON_EMPTY),
        Field::optional("branch", STRING),
    ],
    rules: &[],
};

// Databases

pub static DATABASE: Schema = Schema {
    name: "Database",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("name", STRING),
        Field::required("type", Kind::Enum(DATABASE_TYPES)),
        Field::nullable("version", STRING),
        Field::required("projectUuid", STRING),
        Field::required("environmentName", STRING),
        Field::required("status", STRING),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
        Field::required("updatedAt", STRING),
    ],
    rules: &[],
};

pub static CREATE_DATABASE: Schema = Schema {
    name: "CreateDatabaseInput",
    fields: &[
        Field::required("serverUuid", STRING),
        Field::required("projectUuid", STRING),
        Field::required("environmentName", STRING),
        Field::required("name", STRING).with(NON_EMPTY),
        Field::optional("description", STRING),
    ],
    rules: &[],
};

pub static BACKUP_CONFIG: Schema = Schema {
    name: "BackupConfig",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("enabled", BOOLEAN),
        Field::nullable("schedule", STRING),
        Field::nullable("retentionDays", INTEGER),
        Field::required("databaseUuid", STRING),
        Field::required("databaseName", STRING),
    ],
    rules: &[],
};

pub static BACKUP_EXECUTION: Schema = Schema {
    name: "BackupExecution",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("backupId", STRING),
        Field::required("status", STRING),
        Field::nullable("size", NUMBER),
        Field::required("createdAt", STRING),
        Field::nullable("finishedAt", STRING),
    ],
    rules: &[],
};

pub static CREATE_BACKUP: Schema = Schema {
    name: "CreateBackupInput",
    fields: &[
        Field::required("enabled", BOOLEAN),
        Field::optional("schedule", STRING),
        Field::optional("retentionDays", INTEGER).with(&[Constraint::Range {
            min: 1,
            max: i64::MAX,
        }]),
    ],
    rules: &[],
};

// Services

pub static SERVICE: Schema = Schema {
    name: "Service",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("name", STRING),
        Field::required("type", STRING),
        Field::nullable("version", STRING),
        Field::required("projectUuid", STRING),
        Field::required("environmentName", STRING),
        Field::required("status", STRING),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
        Field::required("updatedAt", STRING),
    ],
    rules: &[],
};

pub static CREATE_SERVICE: Schema = Schema {
    name: "CreateServiceInput",
    fields: &[
        Field::required("projectUuid", STRING),
        Field::required("environmentName", STRING),
        Field::required("name", STRING).with(NON_EMPTY),
        Field::required("type", STRING).with(NON_EMPTY),
    ],
    rules: &[],
};

/// Shared by database and service updates
pub static UPDATE_RESOURCE: Schema = Schema {
    name: "UpdateResourceInput",
    fields: &[
        Field::optional("name", STRING).with(NON_EMPTY),
        Field::optional("description", STRING),
    ],
    rules: &[],
};

// Deployments

pub static DEPLOYMENT: Schema = Schema {
    name: "Deployment",
    fields: &[
        Field::required("uuid", STRING),
        Field::nullable("applicationUuid", STRING),
        Field::nullable("databaseUuid", STRING),
        Field::nullable("serviceUuid", STRING),
        Field::required("status", Kind::Enum(DEPLOYMENT_STATUSES)),
        Field::nullable("commit", STRING),
        Field::nullable("branch", STRING),
        Field::nullable("buildId", INTEGER),
        Field::required("createdAt", STRING),
        Field::required("updatedAt", STRING),
        Field::nullable("finishedAt", STRING),
    ],
    rules: &[Rule::ExactlyOneOf(&[
        "applicationUuid",
        "databaseUuid",
        "serviceUuid",
    ])],
};

pub static CREATE_DEPLOYMENT: Schema = Schema {
    name: "CreateDeploymentInput",
    fields: &[
        Field::required("resourceUuid", STRING).with(NON_EMPTY),
        Field::required("resourceType", Kind::Enum(RESOURCE_TYPES)),
        Field::optional("forceRebuild", BOOLEAN),
    ],
    rules: &[],
};

// Environment variables

pub static ENVIRONMENT_VARIABLE: Schema = Schema {
    name: "EnvironmentVariable",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("key", STRING),
        Field::nullable("value", STRING),
        Field::optional("isBuildSecret", BOOLEAN),
        Field::optional("isPreview", BOOLEAN),
        Field::optional("isSecret", BOOLEAN),
        Field::required("resourceUuid", STRING),
    ],
    rules: &[],
};

pub static CREATE_ENVIRONMENT_VARIABLE: Schema = Schema {
    name: "CreateEnvironmentVariableInput",
    fields: &[
        Field::required("key", STRING).with(NON_EMPTY),
        Field::required("value", STRING),
        Field::optional("isSecret", BOOLEAN),
        Field::optional("isBuildSecret", BOOLEAN),
        Field::optional("isPreview", BOOLEAN),
    ],
    rules: &[],
};

// Security and integrations

pub static SSH_KEY: Schema = Schema {
    name: "SshKey",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("name", STRING),
        Field::required("publicKey", STRING),
        Field::nullable("privateKey", STRING),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
    ],
    rules: &[],
};

pub static CREATE_SSH_KEY: Schema = Schema {
    name: "CreateSshKeyInput",
    fields: &[
        Field::required("name", STRING).with(NON_EMPTY),
        Field::required("privateKey", STRING).with(NON_EMPTY),
        Field::required("publicKey", STRING).with(NON_EMPTY),
    ],
    rules: &[],
};

pub static GITHUB_APP: Schema = Schema {
    name: "GitHubApp",
    fields: &[
        Field::required("id", INTEGER),
        Field::required("name", STRING),
        Field::required("appId", STRING),
        Field::required("installationId", STRING),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
    ],
    rules: &[],
};

pub static CLOUD_TOKEN: Schema = Schema {
    name: "CloudToken",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("name", STRING),
        Field::required("provider", STRING),
        Field::required("isValid", BOOLEAN),
        Field::required("teamId", STRING),
        Field::required("createdAt", STRING),
    ],
    rules: &[],
};

// Resources

pub static RESOURCE: Schema = Schema {
    name: "Resource",
    fields: &[
        Field::required("uuid", STRING),
        Field::required("type", STRING),
        Field::required("name", STRING),
        Field::required("status", STRING),
        Field::nullable("projectUuid", STRING),
        Field::nullable("environmentName", STRING),
    ],
    rules: &[],
};
