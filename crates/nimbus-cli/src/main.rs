//! Nimbus CLI - command-line client for the Nimbus cloud control plane.
//!
//! Each invocation performs one API call, formats the result as a table,
//! JSON or a custom template, and exits.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use colored::*;

use cli::{Cli, Commands, KubernetesCommands, NetworkCommands, SizeCommands, TemplateCommands};
use error::{exit_codes, CliError};
use nimbus_core::config::SettingsStore;
use nimbus_core::ApiClient;
use output::OutputConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let store = match &cli.config {
        Some(path) => SettingsStore::new(path.clone()),
        None => SettingsStore::default_location()?,
    };
    let settings = store.load().await?;

    let api_key = settings.resolve_api_key(cli.api_key.as_deref())?;
    let region = settings.resolve_region(cli.region.as_deref());

    let client = ApiClient::new(&api_key, &region, &settings.api_url)?;
    let output = OutputConfig {
        format: cli.output,
        fields: cli.fields.clone(),
        pretty: cli.pretty,
    };

    match cli.command {
        Commands::Kubernetes(args) => match args.command {
            KubernetesCommands::Versions => {
                commands::kubernetes::run_versions(&client, &output).await
            }
        },
        Commands::Network(args) => match args.command {
            NetworkCommands::Create(create) => {
                commands::network::run_create(&client, create, &output).await
            }
        },
        Commands::Size(args) => match args.command {
            SizeCommands::List(list) => commands::size::run_list(&client, list, &output).await,
        },
        Commands::Template(args) => match args.command {
            TemplateCommands::List => commands::template::run_list(&client, &output).await,
        },
    }
}
