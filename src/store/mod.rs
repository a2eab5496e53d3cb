pub mod json;
pub mod memory;

use crate::app::Result;
use crate::domain::SubscriptionSet;

pub use json::JsonStore;
pub use memory::MemoryStore;

/// Whole-state persistence for the subscription list.
///
/// Implementations assume a single writer at a time.
pub trait Store {
    /// Read the full subscription set.
    fn load(&self) -> Result<SubscriptionSet>;

    /// Replace the stored set with `subs`.
    fn save(&self, subs: &SubscriptionSet) -> Result<()>;
}
