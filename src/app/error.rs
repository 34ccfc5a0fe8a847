use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("No steamid64 given")]
    MissingSteamId,

    #[error("Invalid steamid64 '{0}': expected exactly 17 digits")]
    InvalidSteamId(String),

    #[error("Cannot use both asset id files and asset id urls, specify only one or none")]
    ConflictingSources,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("No asset ids fetched")]
    NoIdentifiers,

    #[error("Inventory unavailable: {0}")]
    InventoryUnavailable(String),

    #[error("Inventory parsing error: {0}")]
    InventoryParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;
