pub mod commands;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::{Result, SweepError};
use crate::domain::SteamId;
use crate::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "assetsweep", version)]
#[command(
    about = "Check a Steam inventory for items whose asset ids appear on tainted lists",
    long_about = None
)]
pub struct Cli {
    /// SteamID64 of the user to check (17 digits)
    #[arg(short = 's', long = "steamid64", value_name = "STEAMID64")]
    pub steam_id: Option<String>,

    /// Files containing asset ids, one per line (comma separated)
    #[arg(long = "files", alias = "assetid-files", value_delimiter = ',', value_name = "PATH")]
    pub files: Option<Vec<PathBuf>>,

    /// URLs of asset id lists, one id per line (comma separated)
    #[arg(long = "urls", alias = "assetid-urls", value_delimiter = ',', value_name = "URL")]
    pub urls: Option<Vec<String>>,

    /// Log level; RUST_LOG overrides it
    #[arg(short, long, value_enum, ignore_case = true)]
    pub log_level: Option<LogLevel>,

    /// Trace output (ignored when --log-level is given)
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug output (ignored when --log-level is given)
    #[arg(short, long)]
    pub debug: bool,

    /// Number of asset id lists fetched at once
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    /// Path to the config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Cli {
    /// Check the steamid and source selection.
    ///
    /// Needs nothing but the arguments, so it runs before any file or
    /// network access.
    pub fn validate(&self) -> Result<SteamId> {
        let steam_id: SteamId = self
            .steam_id
            .as_deref()
            .ok_or(SweepError::MissingSteamId)?
            .parse()?;

        if self.files.is_some() && self.urls.is_some() {
            return Err(SweepError::ConflictingSources);
        }

        Ok(steam_id)
    }

    /// The tracing filter directive selected by the flags.
    pub fn log_directive(&self) -> &'static str {
        match self.log_level {
            Some(LogLevel::Trace) => "trace",
            Some(LogLevel::Debug) => "debug",
            Some(LogLevel::Info) => "info",
            Some(LogLevel::Warn) => "warn",
            Some(LogLevel::Error | LogLevel::Fatal) => "error",
            None if self.verbose => "trace",
            None if self.debug => "debug",
            None => "info",
        }
    }
}
