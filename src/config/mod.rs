//! Configuration management for assetsweep.
//!
//! Defaults can be set in `~/.config/assetsweep/config.toml` (or the file
//! given with `--config`). Command-line flags take precedence over the file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::inventory::{APP_ID_TF2, DEFAULT_CONTEXT_ID, DEFAULT_LANGUAGE};
use crate::domain::matched::DEFAULT_LINK_BASE;
use crate::fetcher::http_fetcher::DEFAULT_USER_AGENT;
use crate::fetcher::parallel::DEFAULT_WORKERS;
use crate::inventory::steam::DEFAULT_INVENTORY_ENDPOINT;
use crate::normalizer::DEFAULT_PREFIXES;
use crate::source::DEFAULT_ASSET_ID_URLS;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub http: HttpConfig,
    pub inventory: InventoryConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Lists fetched when neither files nor urls are given
    pub default_urls: Vec<String>,

    /// Item link prefixes stripped from each line
    pub prefixes: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            default_urls: DEFAULT_ASSET_ID_URLS.iter().map(|u| u.to_string()).collect(),
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,

    /// Maximum concurrent list downloads (default: 10)
    pub workers: usize,

    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            workers: DEFAULT_WORKERS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub endpoint: String,
    pub app_id: u32,
    pub context_id: u32,
    pub language: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_INVENTORY_ENDPOINT.to_string(),
            app_id: APP_ID_TF2,
            context_id: DEFAULT_CONTEXT_ID,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Base of the `<link_base>/item/<assetid>` reference links
    pub link_base: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional: if it
    /// doesn't exist, the built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_config_path() {
                Ok(p) => (p, false),
                Err(_) => return Ok(Self::default()),
            },
        };

        if !required && !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path: `~/.config/assetsweep/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("assetsweep").join("config.toml"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
