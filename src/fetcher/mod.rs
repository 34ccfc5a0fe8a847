pub mod http_fetcher;
pub mod parallel;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

/// Retrieves the raw text of a remote asset id list.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<String>;
}
