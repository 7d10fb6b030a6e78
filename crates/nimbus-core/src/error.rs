//! Error types for the Nimbus core library.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Creating the connection to the Nimbus API failed: {0}")]
    Connection(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from API requests.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("the API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Errors from the persisted CLI settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key set; pass --api-key or set NIMBUS_API_KEY")]
    MissingApiKey,

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
