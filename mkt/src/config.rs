//! Configuration module for the mkt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the mkt application.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MktError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "mkt.toml";

/// Directory name used under the home and platform config directories.
const CONFIG_DIR_NAME: &str = "mkt";

/// How tokens are written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `KIND<TAB>lexeme`, one token per line.
    #[default]
    Plain,
    /// The token's `Debug` form, e.g. `Identifier("x")`.
    Debug,
    /// One JSON object per line.
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Interactive loop settings.
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Token output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix each token with its `line:col`.
    #[serde(default)]
    pub spans: bool,
}

/// REPL configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt printed before each line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    ">> ".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/mkt/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file or an unknown output format is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MktError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "loaded configuration");

        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| MktError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Serialize configuration to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MktError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            output: OutputConfig {
                format: OutputFormat::Json,
                spans: true,
            },
            repl: ReplConfig {
                prompt: "monkey> ".to_string(),
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert!(!config.output.spans);
        assert_eq!(config.repl.prompt, ">> ");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("mkt.toml");

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_toml("[output]\nformat = \"debug\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Debug);
        assert!(!config.output.spans);
        assert_eq!(config.repl.prompt, ">> ");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Config::from_toml("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, MktError::Config(_)));
    }

    #[test]
    fn test_to_toml_names_sections() {
        let text = Config::default().to_toml().unwrap();
        assert!(text.contains("[output]"));
        assert!(text.contains("format = \"plain\""));
        assert!(text.contains("[repl]"));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/mkt.toml"));
        assert!(matches!(result, Err(MktError::Config(_))));
    }
}
