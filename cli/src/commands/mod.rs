//! Command dispatch

pub mod args;
pub mod output;

use std::io::{self, Write};

use colored::Colorize;
use thiserror::Error;

use coolify_api::models::{
    CreateApplicationInput, CreateDatabaseInput, CreateDeploymentInput, CreateEnvironmentInput,
    CreateProjectInput, DatabaseType,
};

use crate::errors::ClientError;
use crate::http::HttpClient;

pub use args::{Cli, Command};
pub use output::Output;

/// Failure of a CLI invocation
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code: 1 configuration, 2 input validation, 3 remote API
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Client(ClientError::Config(_)) => 1,
            CliError::Client(ClientError::InvalidInput(_)) => 2,
            CliError::Client(ClientError::Api(_)) => 3,
            CliError::Render(_) | CliError::Io(_) => 1,
        }
    }
}

/// Run a command and write its rendered result to `out`
pub async fn run<W: Write>(
    client: &HttpClient,
    command: Command,
    force_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let output = execute(client, command).await?;
    writeln!(out, "{}", output.render(force_json)?)?;
    Ok(())
}

/// Run a command against the API
pub async fn execute(client: &HttpClient, command: Command) -> Result<Output, CliError> {
    let output = match command {
        Command::Health => Output::json(&client.health().await?)?,
        Command::Version => Output::json(&client.version().await?)?,
        Command::Teams => Output::json(&client.get_teams().await?)?,
        Command::Team => Output::json(&client.get_current_team().await?)?,

        Command::Projects => Output::table(&client.get_projects().await?)?,
        Command::Project { uuid } => Output::json(&client.get_project(&uuid).await?)?,
        Command::ProjectCreate { name, description } => {
            let input = CreateProjectInput { name, description };
            Output::json(&client.create_project(&input).await?)?
        }
        Command::ProjectDelete { uuid } => {
            client.delete_project(&uuid).await?;
            Output::Text(format!("Project {} deleted", uuid))
        }
        Command::Environments { project_uuid } => {
            Output::json(&client.get_environments(&project_uuid).await?)?
        }
        Command::EnvironmentCreate {
            project_uuid,
            name,
            production,
        } => {
            let input = CreateEnvironmentInput {
                name,
                is_production: Some(production),
            };
            Output::json(&client.create_environment(&project_uuid, &input).await?)?
        }

        Command::Servers => Output::table(&client.get_servers().await?)?,
        Command::Server { uuid } => Output::json(&client.get_server(&uuid).await?)?,
        Command::ServerValidate { uuid } => Output::json(&client.validate_server(&uuid).await?)?,

        Command::Apps => Output::table(&client.get_applications().await?)?,
        Command::App { uuid } => Output::json(&client.get_application(&uuid).await?)?,
        Command::AppCreate {
            project_uuid,
            environment_name,
            name,
            build_pack,
        } => {
            let input = CreateApplicationInput {
                build_pack,
                ..CreateApplicationInput::new(project_uuid, environment_name, name)
            };
            Output::json(&client.create_application(&input).await?)?
        }
        Command::AppDelete { uuid } => {
            client.delete_application(&uuid).await?;
            Output::Text(format!("Application {} deleted", uuid))
        }
        Command::Start { uuid } => Output::json(&client.start_application(&uuid).await?)?,
        Command::Stop { uuid } => Output::json(&client.stop_application(&uuid).await?)?,
        Command::Restart { uuid } => Output::json(&client.restart_application(&uuid).await?)?,
        Command::Deploy {
            uuid,
            resource_type,
            force,
        } => {
            let input = CreateDeploymentInput {
                resource_uuid: uuid,
                resource_type,
                force_rebuild: force.then_some(true),
            };
            Output::json(&client.deploy(&input).await?)?
        }
        Command::Logs { uuid } => {
            let logs = client.get_application_logs(&uuid).await?;
            if logs.is_empty() {
                Output::Text("No logs available".to_string())
            } else {
                Output::Text(logs)
            }
        }
        Command::AppEnvs { uuid } => Output::table(&client.get_application_env_vars(&uuid).await?)?,

        Command::Databases => Output::table(&client.get_databases().await?)?,
        Command::Database { uuid } => Output::json(&client.get_database(&uuid).await?)?,
        Command::DbCreate {
            db_type,
            server_uuid,
            project_uuid,
            environment_name,
            name,
        } => {
            let db_type: DatabaseType = db_type.parse().map_err(ClientError::from)?;
            let input = CreateDatabaseInput {
                server_uuid,
                project_uuid,
                environment_name,
                name,
                description: None,
            };
            Output::json(&client.create_database(db_type, &input).await?)?
        }
        Command::DbDelete { uuid } => {
            client.delete_database(&uuid).await?;
            Output::Text(format!("Database {} deleted", uuid))
        }
        Command::DbStart { uuid } => Output::json(&client.start_database(&uuid).await?)?,
        Command::DbStop { uuid } => Output::json(&client.stop_database(&uuid).await?)?,

        Command::Services => Output::table(&client.get_services().await?)?,
        Command::Service { uuid } => Output::json(&client.get_service(&uuid).await?)?,
        Command::ServiceDelete { uuid } => {
            client.delete_service(&uuid).await?;
            Output::Text(format!("Service {} deleted", uuid))
        }

        Command::Deployments => Output::table(&client.get_deployments().await?)?,
        Command::Deployment { uuid } => Output::json(&client.get_deployment(&uuid).await?)?,
        Command::DeploymentCancel { uuid } => {
            Output::json(&client.cancel_deployment(&uuid).await?)?
        }

        Command::Resources => Output::table(&client.get_resources().await?)?,
        Command::SshKeys => Output::json(&client.get_ssh_keys().await?)?,
        Command::GithubApps => Output::json(&client.get_github_apps().await?)?,
        Command::CloudTokens => Output::json(&client.get_cloud_tokens().await?)?,
    };

    Ok(output)
}

/// Write a failure the way the terminal user sees it
pub fn report_error<W: Write>(err: &CliError, out: &mut W) -> io::Result<()> {
    match err {
        CliError::Client(ClientError::InvalidInput(validation)) => {
            writeln!(out, "{}", "Validation error:".red().bold())?;
            for violation in &validation.violations {
                if violation.path.is_empty() {
                    writeln!(out, "  - {}", violation.message)?;
                } else {
                    writeln!(out, "  - {}: {}", violation.path, violation.message)?;
                }
            }
        }
        CliError::Client(ClientError::Api(api)) => {
            writeln!(out, "{} {}", "Error:".red().bold(), api.message)?;
            if let Some(status) = api.status_code {
                writeln!(out, "Status: {}", status)?;
            }
        }
        other => {
            writeln!(out, "{} {}", "Error:".red().bold(), other)?;
        }
    }
    Ok(())
}
