//! Instance size listing.

use serde::Deserialize;

use super::ApiClient;
use crate::error::CoreError;

/// One purchasable instance size.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceSize {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Size family: "instance", "kubernetes" or "database".
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub cpu_cores: u32,

    #[serde(default)]
    pub ram_mb: u32,

    #[serde(default)]
    pub disk_gb: u32,

    #[serde(default)]
    pub selectable: bool,
}

impl InstanceSize {
    /// Whether this size belongs to the given family filter.
    pub fn matches_kind(&self, filter: &str) -> bool {
        self.kind.contains(filter)
    }
}

impl ApiClient {
    /// List all instance sizes available in the current region.
    pub async fn list_sizes(&self) -> Result<Vec<InstanceSize>, CoreError> {
        self.get("/v2/sizes").await
    }
}
