//! Asset id sources and their aggregation.
//!
//! A run reads either local files or remote urls, never both. With neither
//! configured the built-in remote lists are used.

pub mod file;
pub mod remote;

use std::collections::HashSet;
use std::path::PathBuf;

use url::Url;

use crate::app::{Result, RunContext, SweepError};
use crate::domain::AssetId;

/// Lists of TF2 items and keys involved in the 2023 Gladiator.tf exploit,
/// one backpack.tf item link or bare asset id per line.
pub const DEFAULT_ASSET_ID_URLS: &[&str] = &[
    "https://gist.githubusercontent.com/Moder112/4fc10d3eb85189f974def6fa6f021d37/raw/GladiatorTF%2520Exploit%2520-%2520Items",
    "https://gist.githubusercontent.com/Moder112/d8be3cc3faeb191bdcfe8fb5fe085ab7/raw/GladiatorTF%2520Exploit%2520-%2520Keys",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierSource {
    Files(Vec<PathBuf>),
    Urls(Vec<Url>),
}

impl IdentifierSource {
    /// Pick the active source kind from what the user asked for.
    ///
    /// `default_urls` is used only when neither files nor urls were given.
    pub fn select(
        files: Option<Vec<PathBuf>>,
        urls: Option<Vec<String>>,
        default_urls: &[String],
    ) -> Result<Self> {
        match (files, urls) {
            (Some(_), Some(_)) => Err(SweepError::ConflictingSources),
            (Some(files), None) => Ok(Self::Files(files)),
            (None, Some(urls)) => Ok(Self::Urls(parse_urls(&urls)?)),
            (None, None) => {
                tracing::warn!("No asset id files or urls specified, using default asset id urls");
                Ok(Self::Urls(parse_urls(default_urls)?))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Files(files) => files.len(),
            Self::Urls(urls) => urls.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_urls(urls: &[String]) -> Result<Vec<Url>> {
    urls.iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(|u| Url::parse(u).map_err(SweepError::from))
        .collect()
}

/// Read the configured source into one ordered list of asset ids.
///
/// Duplicates are kept. An empty result is an error: there is nothing to
/// check the inventory against.
pub async fn aggregate(ctx: &RunContext) -> Result<Vec<AssetId>> {
    let ids = match &ctx.source {
        IdentifierSource::Files(paths) => {
            tracing::info!("Reading asset ids from {} files", paths.len());
            file::read_files(paths, &ctx.normalizer).await?
        }
        IdentifierSource::Urls(urls) => {
            tracing::info!("Fetching asset ids from {} urls", urls.len());
            remote::read_urls(&ctx.parallel_fetcher, urls, &ctx.normalizer).await
        }
    };

    if ids.is_empty() {
        return Err(SweepError::NoIdentifiers);
    }

    let unique = ids.iter().collect::<HashSet<_>>().len();
    if unique < ids.len() {
        tracing::debug!("{} duplicate asset ids in input", ids.len() - unique);
    }
    tracing::info!("Fetched {} asset ids", ids.len());

    Ok(ids)
}
