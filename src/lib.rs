//! # vidfeed
//!
//! Aggregates recent uploads from Rumble, Odysee and YouTube channels into a
//! single list, driven by a small JSON subscription file.
//!
//! ## Architecture
//!
//! ```text
//! Store → SubscriptionSet → ParallelFetcher → FeedClient → Normalizer → AggregationResult
//! ```
//!
//! - [`store`]: subscription persistence (JSON file)
//! - [`fetcher`]: HTTP access, per-platform feed client, concurrent aggregation
//! - [`normalizer`]: per-platform XML schemas mapped to [`domain::Entry`]
//! - [`server`]: HTTP front-end
//!
//! ## Quick Start
//!
//! ```bash
//! # Subscribe
//! vidfeed add UCabcdefghijklmnopqrstuv --platform youtube
//! vidfeed add alice:a --platform odysee
//!
//! # Fetch everything
//! vidfeed videos
//!
//! # Serve /subs and /videos on port 8000
//! vidfeed serve
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the store,
/// feed client and aggregator.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// TOML configuration loaded from `~/.config/vidfeed/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Platform`](domain::Platform): the supported platforms
/// - [`Subscription`](domain::Subscription) and [`SubscriptionSet`](domain::SubscriptionSet)
/// - [`Entry`](domain::Entry): one normalized video
pub mod domain;

/// Rumble embed URL lookup.
pub mod embed;

/// Feed fetching and aggregation.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for raw HTTP GETs
/// - [`FeedClient`](fetcher::FeedClient): per-platform fetch and normalize
/// - [`ParallelFetcher`](fetcher::ParallelFetcher): one task per subscription, merged results
pub mod fetcher;

/// Feed parsing and normalization.
pub mod normalizer;

/// HTTP routes for subscriptions and videos.
pub mod server;

/// Subscription persistence.
///
/// - [`Store`](store::Store): trait for whole-set load/save
/// - [`JsonStore`](store::JsonStore): file-backed implementation
pub mod store;

/// List, add and remove subscriptions.
pub mod subscriptions;
