pub mod client;
pub mod http_fetcher;
pub mod parallel;

use async_trait::async_trait;

use crate::app::Result;

pub use client::FeedClient;
pub use http_fetcher::HttpFetcher;
pub use parallel::ParallelFetcher;

/// Raw HTTP access, one GET per call.
#[async_trait]
pub trait Fetcher {
    /// Fetch `url` and return the full response body.
    ///
    /// Non-success statuses are reported as errors.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
