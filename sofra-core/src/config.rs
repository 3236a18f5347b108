//! Global sofra configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_PRAYER_API_URL, DEFAULT_REQUEST_TIMEOUT};
use crate::error::{SofraError, SofraResult};

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_prayer_api_url() -> String {
    DEFAULT_PRAYER_API_URL.to_string()
}

fn default_request_timeout() -> String {
    DEFAULT_REQUEST_TIMEOUT.to_string()
}

/// Global configuration at ~/.config/sofra/config.toml
///
/// Every value can be overridden with a `SOFRA_`-prefixed environment
/// variable (e.g. `SOFRA_DATA_DIR`).
#[derive(Debug, Deserialize, Clone)]
pub struct SofraConfig {
    /// Directory holding the persisted collections (one JSON file per key)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_prayer_api_url")]
    pub prayer_api_url: String,

    /// Human-readable duration, e.g. "10s" or "1m 30s"
    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,
}

impl Default for SofraConfig {
    fn default() -> Self {
        SofraConfig {
            data_dir: default_data_dir(),
            prayer_api_url: default_prayer_api_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl SofraConfig {
    pub fn config_path() -> SofraResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SofraError::Config("Could not determine config directory".into()))?
            .join("sofra");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, creating a commented-out default on first run.
    pub fn load() -> SofraResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> SofraResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("SOFRA"))
            .build()
            .map_err(|e| SofraError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SofraError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn request_timeout(&self) -> SofraResult<Duration> {
        humantime::parse_duration(&self.request_timeout).map_err(|e| {
            SofraError::Config(format!(
                "Invalid request_timeout '{}': {e}",
                self.request_timeout
            ))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SofraResult<()> {
        let contents = format!(
            "\
# sofra configuration

# Where your events, recipes and shopping list are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Prayer time API:
# prayer_api_url = \"{DEFAULT_PRAYER_API_URL}\"

# Timeout for prayer time requests:
# request_timeout = \"{DEFAULT_REQUEST_TIMEOUT}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SofraError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SofraError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SofraConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.prayer_api_url, DEFAULT_PRAYER_API_URL);
        assert_eq!(config.request_timeout().unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_default_config_file_is_all_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        SofraConfig::create_default_config(&path).unwrap();
        let config = SofraConfig::load_from(&path).unwrap();

        assert_eq!(config.prayer_api_url, DEFAULT_PRAYER_API_URL);
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/sofra-data\"\nrequest_timeout = \"1m 30s\"\n",
        )
        .unwrap();

        let config = SofraConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/tmp/sofra-data"));
        assert_eq!(config.request_timeout().unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let config = SofraConfig {
            request_timeout: "soon".to_string(),
            ..SofraConfig::default()
        };

        assert!(matches!(
            config.request_timeout(),
            Err(SofraError::Config(_))
        ));
    }
}
