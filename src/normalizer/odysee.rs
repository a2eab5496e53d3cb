//! Odysee channel feeds from `https://odysee.com/$/rss/@name:claimID`.
//!
//! Item links point at the watch page, which cannot be embedded. The video
//! reference is rebuilt as an embed URL from the subscription ID and the last
//! segment of the link.

use crate::app::Result;
use crate::domain::{Entry, Platform, Subscription};

use super::rss;

pub const ODYSEE_EMBED_URL: &str = "https://odysee.com/$/embed/@";

/// Embeddable URL for an item link under the given `name:claimID` handle.
///
/// `https://odysee.com/@alice:a/some-video:3` under `alice:a` becomes
/// `https://odysee.com/$/embed/@alice:a/some-video:3`.
pub fn embed_url(subscription_id: &str, link: &str) -> String {
    let segment = link.rsplit('/').next().unwrap_or_default();
    format!("{}{}/{}", ODYSEE_EMBED_URL, subscription_id, segment)
}

pub(super) fn normalize(body: &[u8], sub: &Subscription) -> Result<Vec<Entry>> {
    let items = rss::parse_items(body, Platform::Odysee)?;

    tracing::trace!(id = %sub.id, items = items.len(), "Parsed Odysee feed");

    let entries = items
        .into_iter()
        .map(|item| Entry {
            platform: Platform::Odysee,
            video_ref: embed_url(&sub.id, &item.link),
            author: item.author,
            thumbnail_url: item.image,
            published_at: item.pub_date,
            title: item.title,
        })
        .collect();

    Ok(entries)
}
