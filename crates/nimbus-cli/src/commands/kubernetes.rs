//! Kubernetes versions command.

use nimbus_core::client::KubernetesVersion;
use nimbus_core::ApiClient;

use crate::error::CliError;
use crate::output::{OutputConfig, OutputWriter};

/// Run `nimbus kubernetes versions`.
pub async fn run_versions(client: &ApiClient, output: &OutputConfig) -> Result<(), CliError> {
    let versions = client.list_kubernetes_versions().await?;

    let writer = version_rows(&versions);
    println!("{}", writer.render(output));

    Ok(())
}

/// Build the output rows, skipping deprecated versions.
fn version_rows(versions: &[KubernetesVersion]) -> OutputWriter {
    let mut writer = OutputWriter::new();

    for version in versions.iter().filter(|v| !v.is_deprecated()) {
        writer.start_line();
        writer.append_with_header("version", &version.version, "Version");
        writer.append_with_header("type", &version.kind, "Type");
        writer.append_with_header("default", version.default.to_string(), "Default");
    }

    writer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn version(version: &str, kind: &str, default: bool) -> KubernetesVersion {
        serde_json::from_str(&format!(
            r#"{{"version": "{version}", "type": "{kind}", "default": {default}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_deprecated_versions_are_dropped() {
        let versions = [
            version("1.29", "stable", true),
            version("1.20", "deprecated", false),
        ];

        let writer = version_rows(&versions);
        assert_eq!(writer.len(), 1);

        let row = &writer.rows()[0];
        assert_eq!(row[0].value, "1.29");
        assert_eq!(row[1].value, "stable");
        assert_eq!(row[2].value, "true");
    }

    #[test]
    fn test_version_table_shape() {
        let versions = [
            version("1.29", "stable", true),
            version("1.28", "stable", false),
        ];

        let rendered = version_rows(&versions).render(&OutputConfig::default());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Version"));
        assert!(lines[0].contains("Default"));
    }

    #[test]
    fn test_version_json_keys() {
        let versions = [version("1.29", "stable", true)];
        let config = OutputConfig {
            format: OutputFormat::Json,
            ..OutputConfig::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&version_rows(&versions).render(&config)).unwrap();
        let keys: Vec<&String> = parsed[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["version", "type", "default"]);
    }
}
