//! Size list command.

use nimbus_core::client::InstanceSize;
use nimbus_core::ApiClient;

use crate::cli::SizeListArgs;
use crate::error::CliError;
use crate::output::{OutputConfig, OutputWriter};

const KNOWN_FAMILIES: [&str; 3] = ["instance", "kubernetes", "database"];

/// Run `nimbus size list`.
pub async fn run_list(
    client: &ApiClient,
    args: SizeListArgs,
    output: &OutputConfig,
) -> Result<(), CliError> {
    let filter = validate_filter(args.filter.as_deref())?;

    let sizes = client.list_sizes().await?;

    let writer = size_rows(&sizes, filter, output);
    println!("{}", writer.render(output));

    Ok(())
}

fn validate_filter(filter: Option<&str>) -> Result<Option<&str>, CliError> {
    match filter {
        None => Ok(None),
        Some(value) if KNOWN_FAMILIES.contains(&value) => Ok(Some(value)),
        Some(value) => Err(CliError::InvalidArgument(format!(
            "unknown size filter '{}', expected one of: {}",
            value,
            KNOWN_FAMILIES.join(", ")
        ))),
    }
}

fn size_rows(sizes: &[InstanceSize], filter: Option<&str>, output: &OutputConfig) -> OutputWriter {
    let mut writer = OutputWriter::new();

    for size in sizes {
        if let Some(filter) = filter {
            if !size.matches_kind(filter) {
                continue;
            }
        }

        writer.start_line();
        writer.append_if_requested(output, "name", &size.name, "Name");
        writer.append_if_requested(output, "description", &size.description, "Description");
        writer.append_if_requested(output, "type", &size.kind, "Type");
        writer.append_if_requested(output, "cpu", size.cpu_cores.to_string(), "CPU");
        writer.append_if_requested(output, "ram", size.ram_mb.to_string(), "RAM (MB)");
        writer.append_if_requested(output, "disk", size.disk_gb.to_string(), "Disk (GB)");
        writer.append_if_requested(output, "selectable", size.selectable.to_string(), "Selectable");
    }

    writer
}
