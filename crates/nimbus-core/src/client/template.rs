//! Template and disk-image listings.
//!
//! Newer regions serve disk images instead of templates; the CLI maps both
//! onto the same output columns.

use serde::Deserialize;

use super::ApiClient;
use crate::error::CoreError;

/// One installable template (legacy regions).
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub id: String,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub default_username: String,
}

/// One installable disk image (newer regions).
#[derive(Debug, Clone, Deserialize)]
pub struct DiskImage {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub label: String,
}

impl ApiClient {
    /// List templates available in the current region.
    pub async fn list_templates(&self) -> Result<Vec<Template>, CoreError> {
        self.get("/v2/templates").await
    }

    /// List disk images available in the current region.
    pub async fn list_disk_images(&self) -> Result<Vec<DiskImage>, CoreError> {
        self.get("/v2/disk_images").await
    }
}
