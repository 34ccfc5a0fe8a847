use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::app::error::Result;
use crate::cli::Cli;
use crate::config::Config;
use crate::domain::matched::DEFAULT_LINK_BASE;
use crate::domain::{InventoryScope, SteamId};
use crate::fetcher::http_fetcher::{HttpFetcher, HttpOptions};
use crate::fetcher::parallel::{ParallelFetcher, DEFAULT_WORKERS};
use crate::fetcher::Fetcher;
use crate::inventory::{InventoryProvider, SteamInventoryClient};
use crate::normalizer::Normalizer;
use crate::report::ReportFormat;
use crate::source::IdentifierSource;

/// Everything a single run needs, validated up front.
pub struct RunContext {
    pub steam_id: SteamId,
    pub source: IdentifierSource,
    pub scope: InventoryScope,
    pub link_base: Url,
    pub format: ReportFormat,
    pub normalizer: Normalizer,
    pub parallel_fetcher: ParallelFetcher,
    pub inventory: Arc<dyn InventoryProvider + Send + Sync>,
}

impl RunContext {
    pub fn new(
        steam_id: SteamId,
        source: IdentifierSource,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        inventory: Arc<dyn InventoryProvider + Send + Sync>,
    ) -> Self {
        Self {
            steam_id,
            source,
            scope: InventoryScope::default(),
            link_base: default_link_base(),
            format: ReportFormat::default(),
            normalizer: Normalizer::new(),
            parallel_fetcher: ParallelFetcher::with_workers(fetcher, DEFAULT_WORKERS),
            inventory,
        }
    }

    /// Validate the command line against the config and wire up the HTTP
    /// clients. Nothing is fetched or read here.
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self> {
        let steam_id = cli.validate()?;
        tracing::info!("steamid64 {} is valid", steam_id);

        let source = IdentifierSource::select(
            cli.files.clone(),
            cli.urls.clone(),
            &config.sources.default_urls,
        )?;

        let link_base = Url::parse(&config.report.link_base)?;
        let endpoint = Url::parse(&config.inventory.endpoint)?;

        let options = HttpOptions {
            timeout: cli
                .timeout
                .or(config.http.timeout_secs)
                .map(Duration::from_secs),
            user_agent: config.http.user_agent.clone(),
        };
        let http = HttpFetcher::with_options(&options)?;
        let inventory = SteamInventoryClient::new(http.client().clone(), endpoint);

        let workers = cli.workers.unwrap_or(config.http.workers);

        Ok(Self {
            steam_id,
            source,
            scope: InventoryScope {
                app_id: config.inventory.app_id,
                context_id: config.inventory.context_id,
                language: config.inventory.language.clone(),
            },
            link_base,
            format: cli.format,
            normalizer: Normalizer::with_prefixes(config.sources.prefixes.iter().cloned()),
            parallel_fetcher: ParallelFetcher::with_workers(Arc::new(http), workers),
            inventory: Arc::new(inventory),
        })
    }
}

fn default_link_base() -> Url {
    Url::parse(DEFAULT_LINK_BASE).expect("default link base is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SweepError;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["assetsweep"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_valid_context() {
        let ctx = RunContext::from_cli(
            &cli(&["-s", "76561198000000000", "--files", "a.txt,b.txt", "-w", "3"]),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(ctx.steam_id.as_str(), "76561198000000000");
        assert_eq!(ctx.source.len(), 2);
        assert_eq!(ctx.scope, InventoryScope::default());
        assert_eq!(ctx.link_base.as_str(), "https://backpack.tf/");
    }

    #[test]
    fn test_missing_steam_id() {
        let result = RunContext::from_cli(&cli(&[]), &Config::default());
        assert!(matches!(result, Err(SweepError::MissingSteamId)));
    }

    #[test]
    fn test_invalid_steam_id() {
        let result = RunContext::from_cli(&cli(&["-s", "123"]), &Config::default());
        assert!(matches!(result, Err(SweepError::InvalidSteamId(_))));
    }

    #[test]
    fn test_conflicting_sources() {
        let result = RunContext::from_cli(
            &cli(&[
                "-s",
                "76561198000000000",
                "--files",
                "a.txt",
                "--urls",
                "https://example.com/ids",
            ]),
            &Config::default(),
        );
        assert!(matches!(result, Err(SweepError::ConflictingSources)));
    }

    #[test]
    fn test_oversized_worker_count() {
        let ctx = RunContext::from_cli(
            &cli(&["-s", "76561198000000000", "-w", "18446744073709551615"]),
            &Config::default(),
        );
        assert!(ctx.is_ok());
    }

    #[test]
    fn test_config_overrides_scope() {
        let mut config = Config::default();
        config.inventory.language = "german".into();
        config.report.link_base = "https://mirror.example.com".into();

        let ctx = RunContext::from_cli(&cli(&["-s", "76561198000000000"]), &config).unwrap();
        assert_eq!(ctx.scope.language, "german");
        assert_eq!(ctx.link_base.as_str(), "https://mirror.example.com/");
        assert!(matches!(ctx.source, IdentifierSource::Urls(ref u) if u.len() == 2));
    }
}
