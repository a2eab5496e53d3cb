use std::sync::Mutex;

use crate::app::Result;
use crate::domain::SubscriptionSet;
use crate::store::Store;

/// Subscriptions held in process memory.
#[derive(Default)]
pub struct MemoryStore {
    subs: Mutex<SubscriptionSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscriptions(subs: SubscriptionSet) -> Self {
        Self {
            subs: Mutex::new(subs),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<SubscriptionSet> {
        Ok(self.subs.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, subs: &SubscriptionSet) -> Result<()> {
        *self.subs.lock().unwrap_or_else(|e| e.into_inner()) = subs.clone();
        Ok(())
    }
}
