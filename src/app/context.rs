use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::domain::AggregationResult;
use crate::embed;
use crate::fetcher::{FeedClient, Fetcher, HttpFetcher, ParallelFetcher};
use crate::store::JsonStore;
use crate::subscriptions::SubscriptionManager;

pub struct AppContext {
    pub config: Config,
    pub client: Arc<FeedClient>,
    pub subscriptions: SubscriptionManager<JsonStore>,
    pub aggregator: ParallelFetcher,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.feeds)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let client = Arc::new(FeedClient::new(fetcher, config.feeds.clone()));
        let store = JsonStore::new(&config.server.subs_file);
        let subscriptions = SubscriptionManager::new(store, client.clone());
        let aggregator =
            ParallelFetcher::with_workers(client.clone(), config.aggregator.max_concurrency);

        Self {
            config,
            client,
            subscriptions,
            aggregator,
        }
    }

    pub fn store(&self) -> &JsonStore {
        self.subscriptions.store()
    }

    /// Aggregate every stored subscription.
    ///
    /// Only a failure to read the subscription list is an error; individual
    /// feeds that fail are left out of the result.
    pub async fn aggregate(&self) -> Result<AggregationResult> {
        let subs = self.subscriptions.list()?;
        Ok(self.aggregator.aggregate(&subs).await)
    }

    pub async fn lookup_embed(&self, video_url: &str) -> Result<String> {
        embed::lookup_rumble_embed(self.client.fetcher().as_ref(), video_url).await
    }
}
