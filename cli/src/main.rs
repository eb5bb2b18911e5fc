//! coolctl - Entry Point
//!
//! Command line client for Coolify PaaS instances.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use coolctl::commands::{self, Cli, CliError};
use coolctl::logs::{init_logging, LogOptions};
use coolctl::{ClientConfig, HttpClient};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let log_options = LogOptions {
        log_level: cli.log_level,
        json_format: cli.log_json,
    };
    if let Err(e) = init_logging(log_options) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = commands::report_error(&err, &mut io::stderr().lock());
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::resolve(cli.url, cli.token)?;
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = HttpClient::new(config)?;
    debug!("Using Coolify instance at {}", client.base_url());

    let mut stdout = io::stdout().lock();
    commands::run(&client, cli.command, cli.json, &mut stdout).await?;
    stdout.flush()?;
    Ok(())
}
