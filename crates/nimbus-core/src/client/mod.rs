//! Typed client for the Nimbus control-plane REST API.
//!
//! One `ApiClient` per CLI invocation; each command performs a single call
//! and the client holds no state beyond credentials and the resolved region.

pub mod kubernetes;
pub mod network;
pub mod size;
pub mod template;

pub use kubernetes::KubernetesVersion;
pub use network::Network;
pub use size::InstanceSize;
pub use template::{DiskImage, Template};

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, CoreError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Nimbus REST API.
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
    region: String,
}

/// Error body returned by the API on failed requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    reason: String,
}

impl ApiClient {
    /// Create a client for the given credentials and region.
    pub fn new(api_key: &str, region: &str, base_url: &str) -> Result<Self, CoreError> {
        if api_key.is_empty() {
            return Err(CoreError::Connection("API key is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            region: region.to_string(),
        })
    }

    /// Region this client sends with every request.
    pub fn region(&self) -> &str {
        &self.region
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let url = self.url(path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("region", self.region.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Http {
                url: url.clone(),
                source: e,
            })?;

        Self::decode(url, response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .query(&[("region", self.region.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Http {
                url: url.clone(),
                source: e,
            })?;

        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> Result<T, CoreError> {
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Http {
            url: url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            // Failed requests carry a {"code","reason"} body; fall back to
            // the HTTP status text when it is missing or unparseable.
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .map(|body| body.reason)
                .filter(|reason| !reason.is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        serde_json::from_str(&text).map_err(|e| {
            ApiError::Decode {
                url,
                message: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_a_connection_error() {
        let result = ApiClient::new("", "NYC1", "https://api.example.test");
        assert!(matches!(result, Err(CoreError::Connection(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("key", "NYC1", "https://api.example.test/").unwrap();
        assert_eq!(client.url("/v2/sizes"), "https://api.example.test/v2/sizes");
    }

    #[test]
    fn test_error_body_reason_is_preferred() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code":"database_network_exists","reason":"duplicate"}"#)
                .unwrap();
        assert_eq!(body.reason, "duplicate");
    }
}
