use std::path::{Path, PathBuf};

use crate::app::{Result, SweepError};
use crate::domain::AssetId;
use crate::normalizer::Normalizer;

/// Read every file in order and concatenate the normalized asset ids.
///
/// The first unreadable file aborts the whole read.
pub async fn read_files(paths: &[PathBuf], normalizer: &Normalizer) -> Result<Vec<AssetId>> {
    let mut ids = Vec::new();

    for path in paths {
        let mut file_ids = read_file(path, normalizer).await?;
        tracing::info!("Read {} asset ids from {}", file_ids.len(), path.display());
        ids.append(&mut file_ids);
    }

    Ok(ids)
}

async fn read_file(path: &Path, normalizer: &Normalizer) -> Result<Vec<AssetId>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SweepError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(normalizer.normalize(&content))
}
