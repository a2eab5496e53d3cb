use std::sync::Arc;

use crate::app::Result;
use crate::config::FeedsConfig;
use crate::domain::{Entry, Platform, Subscription};
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

/// Fetches and normalizes one subscription's feed.
pub struct FeedClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
    feeds: FeedsConfig,
}

impl FeedClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, feeds: FeedsConfig) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
            feeds,
        }
    }

    pub fn feed_url(&self, sub: &Subscription) -> String {
        self.feeds.feed_url(sub.platform, &sub.id)
    }

    pub async fn fetch(&self, sub: &Subscription) -> Result<Vec<Entry>> {
        let body = self.fetcher.fetch(&self.feed_url(sub)).await?;
        self.normalizer.normalize(sub, &body)
    }

    /// Look up a YouTube channel's display name from its feed.
    ///
    /// The channel ID shape is checked before any request is made.
    pub async fn resolve_channel_name(&self, channel_id: &str) -> Result<String> {
        Platform::YouTube.validate_identifier(channel_id)?;

        let url = self.feeds.feed_url(Platform::YouTube, channel_id);
        let body = self.fetcher.fetch(&url).await?;
        self.normalizer.youtube_channel_name(&body)
    }

    pub fn fetcher(&self) -> &Arc<dyn Fetcher + Send + Sync> {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::VidfeedError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves canned bodies keyed by URL and counts requests.
    #[derive(Default)]
    struct CannedFetcher {
        bodies: HashMap<String, String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Fetcher for CannedFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies
                .get(url)
                .map(|b| b.clone().into_bytes())
                .ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("no canned body for {}", url),
                    )
                    .into()
                })
        }
    }

    const CHANNEL_ID: &str = "UCabcdefghijklmnopqrstuv";

    #[tokio::test]
    async fn test_resolve_channel_name() {
        let mut fetcher = CannedFetcher::default();
        fetcher.bodies.insert(
            FeedsConfig::default().feed_url(Platform::YouTube, CHANNEL_ID),
            r#"<feed><author><name>Resolved Name</name></author></feed>"#.into(),
        );
        let fetcher = Arc::new(fetcher);
        let client = FeedClient::new(fetcher.clone(), FeedsConfig::default());

        let name = client.resolve_channel_name(CHANNEL_ID).await.unwrap();
        assert_eq!(name, "Resolved Name");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolve_rejects_bad_id_without_request() {
        let fetcher = Arc::new(CannedFetcher::default());
        let client = FeedClient::new(fetcher.clone(), FeedsConfig::default());

        let err = client.resolve_channel_name("UCshort").await.unwrap_err();
        assert!(matches!(err, VidfeedError::InvalidIdentifier { .. }));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_error_is_returned() {
        let sub = Subscription::new("gone", "gone", Platform::Rumble);
        let client = FeedClient::new(Arc::new(CannedFetcher::default()), FeedsConfig::default());

        let err = client.fetch(&sub).await.unwrap_err();
        assert!(matches!(err, VidfeedError::Io(_)));
        assert!(!err.is_storage());
    }

    #[tokio::test]
    async fn test_fetch_dispatches_on_platform() {
        let sub = Subscription::new("chan", "chan", Platform::Rumble);
        let mut fetcher = CannedFetcher::default();
        fetcher.bodies.insert(
            FeedsConfig::default().feed_url(Platform::Rumble, "chan"),
            r#"<rss><channel><item><title>T</title><guid>g1</guid></item></channel></rss>"#
                .into(),
        );
        let client = FeedClient::new(Arc::new(fetcher), FeedsConfig::default());

        let entries = client.fetch(&sub).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].platform, Platform::Rumble);
        assert_eq!(entries[0].video_ref, "g1");
        assert_eq!(entries[0].author, "chan");
    }
}
