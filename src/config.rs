use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "exoatlas.json";

/// Environment variable that overrides [`AppConfig::api_key`].
pub const API_KEY_ENV: &str = "NASA_API_KEY";

pub const DEFAULT_DATA_PATH: &str = "exoplanets.csv";
pub const DEFAULT_DATASET_URL: &str =
    "https://drive.google.com/uc?export=download&id=1BE7fiNsFyyq2eHHY-wzQlvNHsBGvgSV0";
pub const DEFAULT_APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

// ---------------------------------------------------------------------------
// Application configuration
// ---------------------------------------------------------------------------

/// Everything the pipeline needs to know about the outside world. Built once
/// in `main` and handed to each component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local cached copy of the dataset.
    pub data_path: PathBuf,
    /// Where to download the dataset from when `data_path` is absent.
    pub dataset_url: String,
    /// APOD endpoint, queried with `api_key`.
    pub apod_endpoint: String,
    pub api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            dataset_url: DEFAULT_DATASET_URL.into(),
            apod_endpoint: DEFAULT_APOD_ENDPOINT.into(),
            api_key: DEFAULT_API_KEY.into(),
        }
    }
}

impl AppConfig {
    /// Read the config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Apply an API key override if one is given and non-empty.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.api_key = key;
        }
        self
    }

    /// Config used by the desktop app: `exoatlas.json` (if any) plus the
    /// `NASA_API_KEY` override. Errors fall back to defaults.
    pub fn from_environment() -> Self {
        let config = match Self::load(Path::new(CONFIG_FILE)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e:#}; using default configuration");
                Self::default()
            }
        };
        config.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_key, "DEMO_KEY");
        assert_eq!(config.data_path, PathBuf::from("exoplanets.csv"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exoatlas.json");
        std::fs::write(&path, r#"{ "data_path": "cache/planets.csv" }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.data_path, PathBuf::from("cache/planets.csv"));
        assert_eq!(config.apod_endpoint, DEFAULT_APOD_ENDPOINT);
        assert_eq!(config.dataset_url, DEFAULT_DATASET_URL);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exoatlas.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn api_key_override_ignores_blank_values() {
        let config = AppConfig::default().with_api_key_override(Some("   ".into()));
        assert_eq!(config.api_key, DEFAULT_API_KEY);

        let config = AppConfig::default().with_api_key_override(None);
        assert_eq!(config.api_key, DEFAULT_API_KEY);

        let config = AppConfig::default().with_api_key_override(Some(" abc123 ".into()));
        assert_eq!(config.api_key, "abc123");
    }
}
