use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use url::Url;

use crate::app::{Result, SweepError};
use crate::domain::AssetId;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

pub const DEFAULT_WORKERS: usize = 10;

/// Outcome of reading a single remote list.
#[derive(Debug)]
pub struct SourceReport {
    pub url: Url,
    pub result: Result<Vec<AssetId>>,
}

pub struct ParallelFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    semaphore: Arc<Semaphore>,
}

impl ParallelFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self::with_workers(fetcher, DEFAULT_WORKERS)
    }

    pub fn with_workers(fetcher: Arc<dyn Fetcher + Send + Sync>, workers: usize) -> Self {
        Self {
            fetcher,
            semaphore: Arc::new(Semaphore::new(workers.clamp(1, Semaphore::MAX_PERMITS))),
        }
    }

    /// Fetch and normalize every url, waiting for all of them to settle.
    ///
    /// Reports come back in the order the urls were given, whatever order
    /// the requests complete in.
    pub async fn fetch_all(&self, urls: Vec<Url>, normalizer: &Normalizer) -> Vec<SourceReport> {
        let mut handles = Vec::with_capacity(urls.len());

        for url in &urls {
            let fetcher = self.fetcher.clone();
            let semaphore = self.semaphore.clone();
            let normalizer = normalizer.clone();
            let url = url.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");

                fetch_single_source(&fetcher, &url, &normalizer).await
            }));
        }

        join_all(handles)
            .await
            .into_iter()
            .zip(urls)
            .map(|(joined, url)| {
                let result = joined.unwrap_or_else(|e| {
                    tracing::error!("Task join error: {}", e);
                    Err(SweepError::Fetch(e.to_string()))
                });
                SourceReport { url, result }
            })
            .collect()
    }
}

async fn fetch_single_source(
    fetcher: &Arc<dyn Fetcher + Send + Sync>,
    url: &Url,
    normalizer: &Normalizer,
) -> Result<Vec<AssetId>> {
    let body = fetcher.fetch(url).await?;
    tracing::debug!("Response from {}: {} bytes", url, body.len());

    let ids = normalizer.normalize(&body);
    tracing::info!("Fetched {} asset ids from {}", ids.len(), url);
    Ok(ids)
}
