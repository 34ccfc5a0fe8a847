use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use assetsweep::app::RunContext;
use assetsweep::cli::{commands, Cli};
use assetsweep::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the command-line level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    // Argument errors are reported before the config file is touched
    cli.validate()?;

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let ctx = RunContext::from_cli(&cli, &config)?;

    let mut stdout = io::stdout().lock();
    commands::run(&ctx, &mut stdout).await?;

    tracing::info!("done.");
    Ok(())
}
