//! User configuration stored as JSON in the platform config directory.

use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use crate::core::remote::HostPolicy;
use crate::core::state::Scenario;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SandboxConfig {
    pub default_scenario: Scenario,
    pub show_suggestions: bool,
    pub color: bool,
    /// Validate clone URLs by host instead of by substring
    pub strict_remote_hosts: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            default_scenario: Scenario::Local,
            show_suggestions: true,
            color: true,
            strict_remote_hosts: false,
        }
    }
}

impl SandboxConfig {
    /// Load `config.json`, writing the defaults if it does not exist yet
    pub fn load_or_create() -> Result<Self> {
        let config_file = get_config_directory()?.join("config.json");
        Self::load_or_create_at(&config_file)
    }

    pub fn load_or_create_at(config_file: &Path) -> Result<Self> {
        if config_file.exists() {
            let content = std::fs::read_to_string(config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save_at(config_file)?;
            Ok(config)
        }
    }

    pub fn save_at(&self, config_file: &Path) -> Result<()> {
        if let Some(parent) = config_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_file, content)?;
        Ok(())
    }

    pub fn host_policy(&self) -> HostPolicy {
        if self.strict_remote_hosts {
            HostPolicy::Strict
        } else {
            HostPolicy::Substring
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_created_with_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("config.json");

        let config = SandboxConfig::load_or_create_at(&path)?;
        assert_eq!(config, SandboxConfig::default());
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "default_scenario": "remote", "strict_remote_hosts": true }"#,
        )?;

        let config = SandboxConfig::load_or_create_at(&path)?;
        assert_eq!(config.default_scenario, Scenario::Remote);
        assert!(config.show_suggestions);
        assert_eq!(config.host_policy(), HostPolicy::Strict);
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json")?;
        assert!(SandboxConfig::load_or_create_at(&path).is_err());
        Ok(())
    }
}
