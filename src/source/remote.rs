use url::Url;

use crate::domain::AssetId;
use crate::fetcher::parallel::ParallelFetcher;
use crate::normalizer::Normalizer;

/// Fetch all lists concurrently and flatten the ones that succeeded.
///
/// A failing url is logged and contributes nothing; it never fails the call.
pub async fn read_urls(
    parallel: &ParallelFetcher,
    urls: &[Url],
    normalizer: &Normalizer,
) -> Vec<AssetId> {
    let reports = parallel.fetch_all(urls.to_vec(), normalizer).await;

    let mut ids = Vec::new();
    let mut failed = 0;

    for report in reports {
        match report.result {
            Ok(mut list) => ids.append(&mut list),
            Err(e) => {
                failed += 1;
                tracing::error!("Error fetching asset ids from {}: {}", report.url, e);
            }
        }
    }

    if failed > 0 {
        tracing::warn!("{} of {} asset id urls failed", failed, urls.len());
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::fetcher::http_fetcher::HttpFetcher;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_second_of_three_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/one"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1a\n1b\n"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/two"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/three"))
            .respond_with(ResponseTemplate::new(200).set_body_string("https://backpack.tf/item/3a"))
            .mount(&server)
            .await;

        let urls: Vec<Url> = ["one", "two", "three"]
            .iter()
            .map(|p| Url::parse(&format!("{}/{}", server.uri(), p)).unwrap())
            .collect();

        let parallel = ParallelFetcher::new(Arc::new(HttpFetcher::new().unwrap()));
        let ids = read_urls(&parallel, &urls, &Normalizer::new()).await;

        assert_eq!(
            ids,
            vec![AssetId::new("1a"), AssetId::new("1b"), AssetId::new("3a")]
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_contributes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("42"))
            .mount(&server)
            .await;

        let urls = vec![
            Url::parse("http://127.0.0.1:1/list").unwrap(),
            Url::parse(&server.uri()).unwrap(),
        ];
        let parallel = ParallelFetcher::new(Arc::new(HttpFetcher::new().unwrap()));
        let ids = read_urls(&parallel, &urls, &Normalizer::new()).await;

        assert_eq!(ids, vec![AssetId::new("42")]);
    }
}
