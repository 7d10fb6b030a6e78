//! Kubernetes version listing.

use serde::Deserialize;

use super::ApiClient;
use crate::error::CoreError;

/// One available Kubernetes cluster version.
#[derive(Debug, Clone, Deserialize)]
pub struct KubernetesVersion {
    pub version: String,

    /// Release channel: "stable", "development", "deprecated", ...
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub default: bool,
}

impl KubernetesVersion {
    pub fn is_deprecated(&self) -> bool {
        self.kind == "deprecated"
    }
}

impl ApiClient {
    /// List all Kubernetes versions the platform offers, deprecated ones
    /// included; filtering is up to the caller.
    pub async fn list_kubernetes_versions(&self) -> Result<Vec<KubernetesVersion>, CoreError> {
        self.get("/v2/kubernetes/versions").await
    }
}
