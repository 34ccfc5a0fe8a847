//! # assetsweep
//!
//! Checks a Steam inventory for items whose asset ids appear on lists of
//! known tainted assets, such as the items and keys moved in the 2023
//! Gladiator.tf exploit.
//!
//! ## Architecture
//!
//! A run is a single batch pipeline:
//!
//! ```text
//! Source (files | urls) → Normalizer → Aggregator → Matcher ← Inventory
//!                                                      ↓
//!                                                    Report
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Check against the built-in lists
//! assetsweep -s 76561198000000000
//!
//! # Check against local lists
//! assetsweep -s 76561198000000000 --files items.txt,keys.txt
//! ```

/// Run context and error handling.
///
/// [`RunContext`](app::RunContext) holds the validated settings and clients
/// for one run.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration file loading (`~/.config/assetsweep/config.toml`).
pub mod config;

/// Core domain models.
///
/// - [`AssetId`](domain::AssetId), [`SteamId`](domain::SteamId)
/// - [`Inventory`](domain::Inventory) and [`InventoryItem`](domain::InventoryItem)
/// - [`Match`](domain::Match)
pub mod domain;

/// HTTP fetching of remote asset id lists.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for list fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`ParallelFetcher`](fetcher::parallel::ParallelFetcher): Concurrent fetching with semaphore
pub mod fetcher;

/// Inventory loading from the trading platform.
pub mod inventory;

/// Matching asset ids against an inventory.
pub mod matcher;

/// Asset id list normalization.
pub mod normalizer;

/// Plain text and JSON reports.
pub mod report;

/// File and remote asset id sources, and their aggregation.
pub mod source;
