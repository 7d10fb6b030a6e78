//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Nimbus CLI - command-line client for the Nimbus cloud control plane
#[derive(Parser, Debug)]
#[command(name = "nimbus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Fields for custom format / field filter (e.g. "id,name" or "ID: {code}")
    #[arg(short, long, global = true)]
    pub fields: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Region for this invocation (overrides the configured region)
    #[arg(long, global = true, env = "NIMBUS_REGION")]
    pub region: Option<String>,

    /// API key (overrides the configured key)
    #[arg(long, global = true, env = "NIMBUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Kubernetes cluster information
    #[command(visible_alias = "k8s")]
    Kubernetes(KubernetesArgs),

    /// Private network management
    #[command(visible_alias = "networks")]
    Network(NetworkArgs),

    /// Instance size information
    #[command(visible_alias = "sizes")]
    Size(SizeArgs),

    /// Instance template information
    #[command(visible_alias = "templates")]
    Template(TemplateArgs),
}

// ==================== Kubernetes ====================

#[derive(Args, Debug)]
pub struct KubernetesArgs {
    #[command(subcommand)]
    pub command: KubernetesCommands,
}

#[derive(Subcommand, Debug)]
pub enum KubernetesCommands {
    /// List all Kubernetes cluster versions
    #[command(visible_alias = "version")]
    Versions,
}

// ==================== Network ====================

#[derive(Args, Debug)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub command: NetworkCommands,
}

#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// Create a new network
    #[command(visible_aliases = ["new", "add"])]
    Create(NetworkCreateArgs),
}

#[derive(Args, Debug)]
pub struct NetworkCreateArgs {
    /// Label for the new network
    pub name: String,
}

// ==================== Size ====================

#[derive(Args, Debug)]
pub struct SizeArgs {
    #[command(subcommand)]
    pub command: SizeCommands,
}

#[derive(Subcommand, Debug)]
pub enum SizeCommands {
    /// List instance sizes
    #[command(visible_aliases = ["ls", "all"])]
    List(SizeListArgs),
}

#[derive(Args, Debug)]
pub struct SizeListArgs {
    /// Filter by size family (instance, kubernetes, database)
    #[arg(short = 's', long)]
    pub filter: Option<String>,
}

// ==================== Template ====================

#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommands,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List templates
    #[command(visible_aliases = ["ls", "all"])]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_reach_subcommands() {
        let cli = Cli::try_parse_from([
            "nimbus", "size", "list", "--output", "json", "--pretty", "--region", "LON1",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.pretty);
        assert_eq!(cli.region.as_deref(), Some("LON1"));
        assert!(matches!(
            cli.command,
            Commands::Size(SizeArgs {
                command: SizeCommands::List(_)
            })
        ));
    }

    #[test]
    fn test_aliases_parse() {
        let cli = Cli::try_parse_from(["nimbus", "kubernetes", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Kubernetes(_)));

        let cli = Cli::try_parse_from(["nimbus", "templates", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::Template(_)));
    }
}
