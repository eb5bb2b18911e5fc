//! Command line arguments

use clap::{Parser, Subcommand};

use crate::config::{TOKEN_ENV, URL_ENV};
use crate::logs::LogLevel;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIME"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "coolctl")]
#[command(about = "Manage Coolify PaaS instances")]
#[command(version, long_version = LONG_VERSION)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Coolify instance URL
    #[arg(long, global = true, env = URL_ENV)]
    pub url: Option<String>,

    /// API token
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print lists as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check API health
    Health,
    /// Get Coolify version
    Version,
    /// List teams
    Teams,
    /// Show the current team
    Team,

    /// List all projects
    #[command(alias = "project-list")]
    Projects,
    /// Get project details
    Project { uuid: String },
    /// Create a project
    ProjectCreate {
        name: String,
        description: Option<String>,
    },
    /// Delete a project
    ProjectDelete { uuid: String },
    /// List project environments
    #[command(alias = "env-list")]
    Environments { project_uuid: String },
    /// Create an environment
    EnvironmentCreate {
        project_uuid: String,
        name: String,
        /// Mark the environment as production
        #[arg(long)]
        production: bool,
    },

    /// List all servers
    #[command(alias = "server-list")]
    Servers,
    /// Get server details
    Server { uuid: String },
    /// Validate server connection
    ServerValidate { uuid: String },

    /// List all applications
    #[command(aliases = ["applications", "app-list"])]
    Apps,
    /// Get application details
    #[command(alias = "application")]
    App { uuid: String },
    /// Create an application
    AppCreate {
        project_uuid: String,
        environment_name: String,
        name: String,
        /// nixpacks, dockerfile, dockerimage or static
        build_pack: Option<String>,
    },
    /// Delete an application
    AppDelete { uuid: String },
    /// Start an application
    Start { uuid: String },
    /// Stop an application
    Stop { uuid: String },
    /// Restart an application
    Restart { uuid: String },
    /// Deploy a resource
    Deploy {
        uuid: String,
        /// application, database or service
        #[arg(default_value = "application")]
        resource_type: String,
        /// Rebuild without cache
        #[arg(long)]
        force: bool,
    },
    /// Get application logs
    Logs { uuid: String },
    /// List application environment variables
    #[command(alias = "app-env-list")]
    AppEnvs { uuid: String },

    /// List all databases
    #[command(alias = "database-list")]
    Databases,
    /// Get database details
    Database { uuid: String },
    /// Create a database
    DbCreate {
        /// postgresql, mysql, mariadb, mongodb, redis, clickhouse, dragonfly or keydb
        db_type: String,
        server_uuid: String,
        project_uuid: String,
        environment_name: String,
        name: String,
    },
    /// Delete a database
    DbDelete { uuid: String },
    /// Start a database
    DbStart { uuid: String },
    /// Stop a database
    DbStop { uuid: String },

    /// List all services
    #[command(alias = "service-list")]
    Services,
    /// Get service details
    Service { uuid: String },
    /// Delete a service
    ServiceDelete { uuid: String },

    /// List all deployments
    #[command(alias = "deployment-list")]
    Deployments,
    /// Get deployment details
    Deployment { uuid: String },
    /// Cancel a deployment
    DeploymentCancel { uuid: String },

    /// List all resources
    Resources,
    /// List SSH keys
    SshKeys,
    /// List GitHub apps
    GithubApps,
    /// List cloud tokens
    CloudTokens,
}
