// src/infrastructure/config.rs
use crate::constants::CONFIG_FILE;
use crate::ports::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for runboard
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_avatar_size")]
    pub avatar_size: u32,
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_payload_dir")]
    pub payload_dir: String,
}

// Default value functions
fn default_avatar_size() -> u32 { 24 }
fn default_page_title() -> String { "Notes".to_string() }
fn default_payload_dir() -> String { ".".to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            avatar_size: default_avatar_size(),
            page_title: default_page_title(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            payload_dir: default_payload_dir(),
        }
    }
}

impl Config {
    /// Platform config location, e.g. `~/.config/runboard/config.toml` on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        if let Some((field, value)) = config.theme.invalid_color() {
            anyhow::bail!("Invalid theme color {}: {:?}", field, value);
        }

        Ok(config)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to TOML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }
        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}
