//! Configuration loading.
//!
//! Settings come from `config.json` in the platform config directory, with
//! `CIDCTL_*` environment variables taking precedence.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("org", "cidtree", "cidctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (`table` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Log level used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Treat objects as leaves unless a command says otherwise.
    #[serde(default)]
    pub leaf_by_default: bool,
}

fn default_format() -> String {
    "table".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: default_format(),
            log_level: default_log_level(),
            leaf_by_default: false,
        }
    }
}

impl Config {
    /// Load config from disk (or defaults) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);

        let config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::from_json(&contents)
                .with_context(|| format!("Failed to parse config from {:?}", path))?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    fn with_env_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(format) = var("CIDCTL_FORMAT") {
            self.format = format;
        }
        if let Some(level) = var("CIDCTL_LOG_LEVEL") {
            self.log_level = level;
        }
        self
    }

    /// Location of the config file, for display.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.format, "table");
        assert_eq!(config.log_level, "warn");
        assert!(!config.leaf_by_default);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_json(r#"{ "leaf_by_default": true }"#).unwrap();
        assert!(config.leaf_by_default);
        assert_eq!(config.format, "table");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_env_overrides(|key| match key {
            "CIDCTL_FORMAT" => Some("json".to_string()),
            _ => None,
        });
        assert_eq!(config.format, "json");
        assert_eq!(config.log_level, "warn");
    }
}
