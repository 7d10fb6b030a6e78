//! Network creation.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::CoreError;

/// Result record for a created network.
#[derive(Debug, Clone, Deserialize)]
pub struct Network {
    pub id: String,
    pub label: String,

    /// API outcome marker ("success" on creation).
    #[serde(default)]
    pub result: String,
}

#[derive(Serialize)]
struct CreateNetworkRequest<'a> {
    label: &'a str,
}

impl ApiClient {
    /// Create a new private network with the given label.
    pub async fn create_network(&self, label: &str) -> Result<Network, CoreError> {
        self.post("/v2/networks", &CreateNetworkRequest { label }).await
    }
}
