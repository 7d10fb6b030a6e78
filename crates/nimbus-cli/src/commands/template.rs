//! Template list command.
//!
//! Newer regions (NYC1) serve disk images instead of templates; both are
//! mapped onto the same four columns so the output shape does not depend on
//! the region.

use nimbus_core::client::{DiskImage, Template};
use nimbus_core::ApiClient;

use crate::error::CliError;
use crate::output::{OutputConfig, OutputWriter};

/// Region whose template listing is backed by the disk-image endpoint.
const DISK_IMAGE_REGION: &str = "NYC1";

/// Uniform listing record for templates and disk images.
struct TemplateDisk {
    id: String,
    name: String,
    version: String,
    label: String,
}

/// Run `nimbus template list`.
pub async fn run_list(client: &ApiClient, output: &OutputConfig) -> Result<(), CliError> {
    let records: Vec<TemplateDisk> = if client.region() == DISK_IMAGE_REGION {
        client.list_disk_images().await?.into_iter().map(from_disk_image).collect()
    } else {
        client.list_templates().await?.into_iter().map(from_template).collect()
    };

    let writer = template_rows(&records);
    println!("{}", writer.render(output));

    Ok(())
}

fn from_disk_image(image: DiskImage) -> TemplateDisk {
    TemplateDisk {
        id: image.id,
        name: image.name,
        version: image.version,
        label: image.label,
    }
}

fn from_template(template: Template) -> TemplateDisk {
    TemplateDisk {
        id: template.id,
        name: template.name,
        version: template.code,
        label: template.short_description,
    }
}

fn template_rows(records: &[TemplateDisk]) -> OutputWriter {
    let mut writer = OutputWriter::new();

    for record in records {
        writer.start_line();
        writer.append_with_header("id", &record.id, "ID");
        writer.append_with_header("name", &record.name, "Name");
        writer.append_with_header("version", &record.version, "Version");
        writer.append_with_header("label", &record.label, "Label");
    }

    writer
}
