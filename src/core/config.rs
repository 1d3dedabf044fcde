use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

use super::conversion::ApiKey;

pub const DEFAULT_BASE_URL: &str = "https://api.getgeoapi.com";
pub const API_KEY_ENV: &str = "FXCONV_API_KEY";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read config file: {} (run `fxconv setup` to create one)",
                path.as_ref().display()
            )
        })?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// The API key from `FXCONV_API_KEY` if set, else from the config file.
    pub fn api_key(&self) -> Result<ApiKey> {
        self.api_key_or_env(std::env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn api_key_or_env(&self, env_key: Option<String>) -> Result<ApiKey> {
        env_key
            .map(ApiKey::new)
            .filter(|key| !key.is_empty())
            .or_else(|| {
                self.provider
                    .api_key
                    .clone()
                    .filter(|key| !key.is_empty())
            })
            .with_context(|| {
                format!("No API key configured; set provider.api_key or {API_KEY_ENV}")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/geo"
  api_key: "abc123"
  timeout_secs: 3
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/geo");
        assert_eq!(config.provider.timeout(), Duration::from_secs(3));
        assert_eq!(
            config.provider.api_key.as_ref().map(ApiKey::expose),
            Some("abc123")
        );
        assert!(!format!("{config:?}").contains("abc123"));
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("provider:\n  api_key: k\n").unwrap();
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.provider.timeout_secs, 10);

        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn test_api_key_resolution() {
        let mut config = AppConfig::default();
        assert!(config.api_key_or_env(None).is_err());
        assert!(
            config
                .api_key_or_env(Some("  ".to_string()))
                .is_err()
        );

        config.provider.api_key = Some(ApiKey::new("from-file"));
        assert_eq!(
            config.api_key_or_env(None).unwrap().expose(),
            "from-file"
        );
        assert_eq!(
            config
                .api_key_or_env(Some("from-env".to_string()))
                .unwrap()
                .expose(),
            "from-env"
        );
    }

    #[test]
    fn test_load_from_missing_path_mentions_setup() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AppConfig::load_from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("fxconv setup"));
    }
}
