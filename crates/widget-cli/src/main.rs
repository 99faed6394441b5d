//! Widget Builder CLI
//!
//! The command-line interface for developing storefront widgets.

mod cli;
mod commands;
mod error;
mod logging;

use std::future::Future;

use clap::Parser;
use colored::Colorize;
use widget_api::{WidgetClient, check_credentials};

use cli::{AuthArgs, Cli, Commands};
use commands::preview::PreviewTarget;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Widget Builder CLI", "widget-builder".green().bold());
            println!();
            println!("Run {} for available commands.", "widget-builder --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::GenerateConfig { dir, print } => commands::run_generate_config(&dir, print),
        Commands::Validate { dir } => commands::run_validate(&dir),
        Commands::CheckAuth { auth } => commands::run_check_auth(&auth.auth_config()),
        Commands::Preview {
            dir,
            placement_uuid,
            widget_uuid,
            auth,
        } => {
            let client = api_client(&auth)?;
            let target = PreviewTarget {
                placement_uuid,
                widget_uuid,
                channel_id: auth.channel_id,
            };
            block_on(commands::run_preview(&client, &dir, &target))
        }
        Commands::Publish { dir, uuid, auth } => {
            let client = api_client(&auth)?;
            block_on(commands::run_publish(
                &client,
                &dir,
                uuid.as_deref(),
                auth.channel_id,
            ))
            .map(drop)
        }
    }
}

fn api_client(auth: &AuthArgs) -> Result<WidgetClient> {
    let config = auth.auth_config();
    if !check_credentials(&config) {
        return Err(CliError::user("Set the missing credentials and try again"));
    }
    Ok(WidgetClient::new(config)?)
}

/// Drive an API command on a single-threaded runtime.
fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Io)?;
    runtime.block_on(future)
}
