//! Rumble channel feeds, as produced by the rssgen.xyz generator.
//!
//! The generated feed carries no author, so entries take the subscription's
//! display name. The item `guid` is the video ID.

use crate::app::Result;
use crate::domain::{Entry, Platform, Subscription};

use super::rss::{self, RssItem};

fn thumbnail_url(item: &RssItem) -> String {
    if item.image.is_empty() {
        item.thumbnail.clone()
    } else {
        item.image.clone()
    }
}

pub(super) fn normalize(body: &[u8], sub: &Subscription) -> Result<Vec<Entry>> {
    let items = rss::parse_items(body, Platform::Rumble)?;

    tracing::trace!(channel = %sub.name, items = items.len(), "Parsed Rumble feed");

    let entries = items
        .into_iter()
        .map(|item| Entry {
            platform: Platform::Rumble,
            thumbnail_url: thumbnail_url(&item),
            published_at: item.pub_date,
            title: item.title,
            author: sub.name.clone(),
            video_ref: item.guid,
        })
        .collect();

    Ok(entries)
}
