//! Network create command.

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use nimbus_core::client::Network;
use nimbus_core::ApiClient;

use crate::cli::NetworkCreateArgs;
use crate::error::CliError;
use crate::output::{OutputConfig, OutputFormat, OutputWriter};

/// Run `nimbus network create NAME`.
pub async fn run_create(
    client: &ApiClient,
    args: NetworkCreateArgs,
    output: &OutputConfig,
) -> Result<(), CliError> {
    // Spinner only in human (table) mode; JSON/custom output must stay clean.
    let spinner = match output.format {
        OutputFormat::Table => Some(request_spinner(&args.name)),
        _ => None,
    };

    let result = client.create_network(&args.name).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let network = result?;

    match output.format {
        OutputFormat::Table => {
            println!(
                "Created a network called {} with ID {}",
                network.label.green(),
                network.id.green()
            );
        }
        _ => {
            println!("{}", network_row(&network).render_object(output));
        }
    }

    Ok(())
}

fn request_spinner(name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Creating network {}...", name));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn network_row(network: &Network) -> OutputWriter {
    OutputWriter::single(&[("id", &network.id), ("label", &network.label)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(id: &str, label: &str) -> Network {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "label": "{label}", "result": "success"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_single_object_json() {
        let config = OutputConfig {
            format: OutputFormat::Json,
            ..OutputConfig::default()
        };

        let rendered = network_row(&network("net-1", "backend")).render_object(&config);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert!(parsed.is_object());
        assert_eq!(parsed["id"], "net-1");
        assert_eq!(parsed["label"], "backend");
    }

    #[test]
    fn test_custom_template_over_single_row() {
        let config = OutputConfig {
            format: OutputFormat::Custom,
            fields: Some("{label}: {id}".to_string()),
            ..OutputConfig::default()
        };

        let rendered = network_row(&network("net-1", "backend")).render_object(&config);
        assert_eq!(rendered, "backend: net-1");
    }
}
