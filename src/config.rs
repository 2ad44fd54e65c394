//! Configuration management for taskpad
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_TIMEOUT_MAX_SECS, APP_NAME, CONFIG_GENERATED, DEFAULT_API_BASE_URL, TOAST_DWELL_MAX_MS, TOAST_DWELL_MIN_MS,
    TOAST_DWELL_MS,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Backend types accepted in `[api] backend`
pub const SUPPORTED_BACKENDS: [&str; 2] = ["mockapi", "memory"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Remote task store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; tasks live under `{base_url}/Task`
    pub base_url: String,
    /// Backend type: "mockapi" or "memory"
    pub backend: String,
    /// Per-request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays fully visible, in milliseconds
    pub toast_dwell_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime format for the "Criada em" date
    pub date_format: String,
    /// Show task descriptions in list view
    pub show_descriptions: bool,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file; defaults to `<data_dir>/taskpad/taskpad.db`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            backend: "mockapi".to_string(),
            timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_dwell_ms: TOAST_DWELL_MS,
        }
    }
}

impl UiConfig {
    pub fn toast_dwell(&self) -> Duration {
        Duration::from_millis(self.toast_dwell_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DISPLAY_DATE_FORMAT.to_string(),
            show_descriptions: true,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(format!("{}.toml", APP_NAME));
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_BACKENDS.contains(&self.api.backend.as_str()) {
            anyhow::bail!(
                "unsupported backend '{}'. Available backends: {}",
                self.api.backend,
                SUPPORTED_BACKENDS.join(", ")
            );
        }

        if self.api.backend == "mockapi"
            && !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"))
        {
            anyhow::bail!("base_url must start with http:// or https://, got '{}'", self.api.base_url);
        }

        if self.api.timeout_secs > API_TIMEOUT_MAX_SECS {
            anyhow::bail!("timeout_secs cannot exceed {}", API_TIMEOUT_MAX_SECS);
        }

        if !(TOAST_DWELL_MIN_MS..=TOAST_DWELL_MAX_MS).contains(&self.ui.toast_dwell_ms) {
            anyhow::bail!(
                "toast_dwell_ms must be between {} and {}, got {}",
                TOAST_DWELL_MIN_MS,
                TOAST_DWELL_MAX_MS,
                self.ui.toast_dwell_ms
            );
        }

        if !datetime::is_valid_format(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        Ok(())
    }

    /// Database file to use, honoring `[storage] database_path`
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.storage.database_path {
            Some(path) => Ok(path.clone()),
            None => dirs::data_dir()
                .or_else(dirs::home_dir)
                .map(|dir| dir.join(APP_NAME).join(format!("{}.db", APP_NAME)))
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory")),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# taskpad Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
