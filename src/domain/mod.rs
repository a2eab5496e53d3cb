pub mod entry;
pub mod subscription;

pub use entry::{AggregationResult, Entry};
pub use subscription::{Platform, Subscription, SubscriptionSet};
