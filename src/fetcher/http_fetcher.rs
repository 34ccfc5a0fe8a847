use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::fetcher::Fetcher;

pub const DEFAULT_USER_AGENT: &str = concat!("assetsweep/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Per-request timeout. `None` leaves reqwest's defaults in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_options(&HttpOptions::default())
    }

    pub fn with_options(options: &HttpOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(options.user_agent.as_str());

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// The underlying client, shared with the inventory client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        response.error_for_status_ref()?;

        let body = response.text().await?;
        tracing::trace!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/list"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("1\n2\n"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let url = Url::parse(&format!("{}/list", server.uri())).unwrap();
        let body = assert_ok!(fetcher.fetch(&url).await);
        assert_eq!(body, "1\n2\n");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let url = Url::parse(&server.uri()).unwrap();
        let err = assert_err!(fetcher.fetch(&url).await);
        assert!(matches!(err, crate::app::SweepError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::with_options(&HttpOptions {
            timeout: Some(Duration::from_millis(100)),
            ..HttpOptions::default()
        })
        .unwrap();
        let url = Url::parse(&server.uri()).unwrap();
        assert_err!(fetcher.fetch(&url).await);
    }
}
