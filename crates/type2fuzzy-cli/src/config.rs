//! Configuration file support for the type2fuzzy CLI
//!
//! Supports loading configuration from .type2fuzzyrc files in:
//! - Custom path via environment variable
//! - Current directory
//! - User home directory

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use type2fuzzy_reduce::ReductionConfig;

use crate::cli::OutputFormat;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "TYPE2FUZZY_CONFIG";

const CONFIG_FILE_NAME: &str = ".type2fuzzyrc";

/// Configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable colored output
    pub colored: bool,

    /// Default log level filter
    pub log_level: String,

    /// Default output format
    pub output_format: OutputFormat,

    /// Default number of z-slices for Hagras reduction
    pub slices: usize,

    /// Reducer settings
    pub reduction: ReductionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colored: true,
            log_level: "warn".to_string(),
            output_format: OutputFormat::Text,
            slices: 10,
            reduction: ReductionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Find and load configuration file
    ///
    /// Search order:
    /// 1. TYPE2FUZZY_CONFIG environment variable
    /// 2. .type2fuzzyrc in current directory
    /// 3. .type2fuzzyrc in user home directory
    ///
    /// A file that exists but fails to parse is an error; no file at all
    /// yields the defaults.
    pub fn load_default() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::load(&path);
            }
        }

        let current_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_config.exists() {
            return Self::load(&current_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(CONFIG_FILE_NAME);
            if home_config.exists() {
                return Self::load(&home_config);
            }
        }

        Ok(Self::default())
    }

    /// Get configuration file path (environment, current or home)
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        let current = PathBuf::from(CONFIG_FILE_NAME);
        if current.exists() {
            return current;
        }

        if let Some(home) = dirs::home_dir() {
            home.join(CONFIG_FILE_NAME)
        } else {
            current
        }
    }

    /// Create a default configuration file
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path();
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        Self::default().save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use type2fuzzy_reduce::Information;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.slices, 10);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.reduction, ReductionConfig::default());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = Config {
            slices: 4,
            reduction: ReductionConfig::default()
                .with_precision(3)
                .with_information(Information::Full),
            ..Config::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            output_format = "json"

            [reduction]
            precision = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.reduction.precision, 2);
        assert_eq!(config.slices, 10);
        assert!(config.colored);
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            colored: false,
            ..Config::default()
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);

        std::fs::write(&path, "slices = \"many\"").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
