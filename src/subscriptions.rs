use std::sync::Arc;

use crate::app::Result;
use crate::domain::{Platform, Subscription, SubscriptionSet};
use crate::fetcher::FeedClient;
use crate::store::Store;

/// Result of [`SubscriptionManager::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The subscription that was requested, with its resolved display name
    pub subscription: Subscription,
    /// The full set after the call
    pub subscriptions: SubscriptionSet,
    /// False when the subscription already existed and nothing was written
    pub inserted: bool,
}

/// List/add/remove on top of a [`Store`].
pub struct SubscriptionManager<S> {
    store: S,
    client: Arc<FeedClient>,
}

impl<S: Store> SubscriptionManager<S> {
    pub fn new(store: S, client: Arc<FeedClient>) -> Self {
        Self { store, client }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> Result<SubscriptionSet> {
        self.store.load()
    }

    /// Subscribe to a channel.
    ///
    /// The identifier shape is validated first. YouTube display names are
    /// fetched from the channel feed; the other platforms derive them from the
    /// identifier. Adding an existing `(name, id, platform)` is a no-op.
    pub async fn add(&self, identifier: &str, platform: Platform) -> Result<AddOutcome> {
        platform.validate_identifier(identifier)?;

        let mut subs = self.store.load()?;

        let name = match platform.local_display_name(identifier) {
            Some(name) => name.to_string(),
            None => self.client.resolve_channel_name(identifier).await?,
        };
        let subscription = Subscription::new(name, identifier, platform);

        let inserted = subs.insert(subscription.clone());
        if inserted {
            self.store.save(&subs)?;
            tracing::info!(
                platform = %subscription.platform,
                name = %subscription.name,
                id = %subscription.id,
                "Added subscription"
            );
        } else {
            tracing::debug!(id = %subscription.id, "Subscription already exists");
        }

        Ok(AddOutcome {
            subscription,
            subscriptions: subs,
            inserted,
        })
    }

    /// Drop every subscription with this ID, whatever its platform.
    pub fn remove(&self, identifier: &str) -> Result<SubscriptionSet> {
        let mut subs = self.store.load()?;

        let removed = subs.remove_id(identifier);
        if removed > 0 {
            self.store.save(&subs)?;
            tracing::info!(id = identifier, removed, "Removed subscription");
        }

        Ok(subs)
    }
}
