use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};

use crate::domain::{AggregationResult, Entry, SubscriptionSet};
use crate::fetcher::FeedClient;

/// Worker count meaning "no cap": one task per subscription, all at once.
pub const UNBOUNDED: usize = 0;

/// Fans out one fetch per subscription and merges whatever succeeds.
pub struct ParallelFetcher {
    client: Arc<FeedClient>,
    semaphore: Option<Arc<Semaphore>>,
}

impl ParallelFetcher {
    pub fn new(client: Arc<FeedClient>) -> Self {
        Self::with_workers(client, UNBOUNDED)
    }

    pub fn with_workers(client: Arc<FeedClient>, workers: usize) -> Self {
        let semaphore = (workers != UNBOUNDED).then(|| Arc::new(Semaphore::new(workers)));
        Self { client, semaphore }
    }

    /// Fetch every subscription concurrently and collect all entries.
    ///
    /// A feed that fails to fetch or parse is logged and contributes nothing;
    /// this never fails as a whole. Returns once every fetch has finished.
    /// Entries are in completion order.
    pub async fn aggregate(&self, subs: &SubscriptionSet) -> AggregationResult {
        let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Entry>>();

        for sub in subs.iter().cloned() {
            let client = self.client.clone();
            let semaphore = self.semaphore.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                match client.fetch(&sub).await {
                    Ok(entries) => {
                        tracing::debug!(
                            platform = %sub.platform,
                            id = %sub.id,
                            entries = entries.len(),
                            "Fetched feed"
                        );
                        // Receiver outlives every sender
                        let _ = tx.send(entries);
                    }
                    Err(e) => {
                        tracing::warn!(
                            platform = %sub.platform,
                            name = %sub.name,
                            id = %sub.id,
                            error = %e,
                            "Failed to fetch feed"
                        );
                    }
                }
            });
        }
        drop(tx);

        let mut result = AggregationResult::default();
        while let Some(batch) = rx.recv().await {
            result.entries.extend(batch);
        }

        tracing::info!(
            subscriptions = subs.len(),
            entries = result.len(),
            "Aggregation complete"
        );
        result
    }
}
