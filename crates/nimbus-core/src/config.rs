//! Persisted CLI settings.
//!
//! Settings are stored as a single JSON file under the platform config
//! directory. The store takes its path in the constructor so each consumer
//! (and every test) can point it at the right place.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::ConfigError;

/// Default region used until the user configures one.
pub const DEFAULT_REGION: &str = "NYC1";

/// Production API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.nimbus.cloud";

const CONFIG_FILE: &str = "config.json";

/// Persisted CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// API key used as the bearer token. Absent on a fresh install.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Current region for API calls.
    #[serde(default = "default_region")]
    pub region: String,

    /// Base URL of the API endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            region: default_region(),
            api_url: default_api_url(),
        }
    }
}

impl Settings {
    /// Resolve the region for this invocation.
    ///
    /// An explicit `--region` flag always wins over the stored region.
    pub fn resolve_region(&self, flag: Option<&str>) -> String {
        match flag {
            Some(region) if !region.is_empty() => region.to_string(),
            _ => self.region.clone(),
        }
    }

    /// Resolve the API key, preferring an explicit flag or environment
    /// override over the stored key.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> Result<String, ConfigError> {
        match flag {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => self
                .api_key
                .clone()
                .filter(|k| !k.is_empty())
                .ok_or(ConfigError::MissingApiKey),
        }
    }
}

/// File-backed settings store.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the platform default location
    /// (e.g. `~/.config/nimbus/config.json` on Linux).
    pub fn default_location() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("cloud", "nimbus", "nimbus")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when no file exists yet.
    pub async fn load(&self) -> Result<Settings, ConfigError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path).await.map_err(ConfigError::Io)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    /// Write settings back to disk, creating parent directories as needed.
    pub async fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(ConfigError::Io)?;
        }

        let data = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, data).await.map_err(ConfigError::Io)?;
        Ok(())
    }
}
