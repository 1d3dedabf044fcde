use crate::core::config::AppConfig;
use crate::core::conversion::ApiKey;
use anyhow::{Context, Result};
use std::path::Path;

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");
const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

/// Writes the example configuration to the default location.
pub fn setup(api_key: Option<ApiKey>) -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(&path, api_key.as_ref())?;
    println!("Created configuration at {}", path.display());
    Ok(())
}

/// Writes the example configuration to `path`, filling in `api_key` when
/// given. Never overwrites an existing file.
pub fn setup_at_path<P: AsRef<Path>>(path: P, api_key: Option<&ApiKey>) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let config = match api_key {
        Some(key) => EXAMPLE_CONFIG.replace(API_KEY_PLACEHOLDER, key.expose()),
        None => EXAMPLE_CONFIG.to_string(),
    };

    std::fs::write(path, config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_setup_creates_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.yaml");

        setup_at_path(&config_path, None)?;
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path)?;
        assert!(content.contains("provider:"));
        assert!(content.contains("# Example configuration file for fxconv"));

        let config = AppConfig::load_from_path(&config_path)?;
        assert_eq!(config.provider.timeout_secs, 10);
        assert_eq!(
            config.provider.api_key.as_ref().map(ApiKey::expose),
            Some(API_KEY_PLACEHOLDER)
        );

        Ok(())
    }

    #[test]
    fn test_setup_fills_in_api_key() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        setup_at_path(&config_path, Some(&ApiKey::new("k-123")))?;

        let config = AppConfig::load_from_path(&config_path)?;
        assert_eq!(config.api_key_or_env(None)?.expose(), "k-123");
        Ok(())
    }

    #[test]
    fn test_setup_fails_if_config_exists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "test")?;

        let result = setup_at_path(&config_path, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&config_path)?, "test");

        Ok(())
    }

    #[test]
    fn test_example_config_is_valid_yaml() -> Result<()> {
        let config: AppConfig = serde_yaml::from_str(EXAMPLE_CONFIG)
            .context("Failed to parse example config as YAML")?;

        assert_eq!(config.provider.base_url, crate::core::config::DEFAULT_BASE_URL);
        assert!(config.provider.api_key.is_some());

        Ok(())
    }
}
