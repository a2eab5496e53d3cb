//! YouTube channel feeds (Atom) from `feeds/videos.xml?channel_id=UC…`.
//!
//! Unlike the RSS flavors, every consumed value has a dedicated element,
//! including the embeddable `yt:videoId`.

use serde::Deserialize;

use crate::app::{Result, VidfeedError};
use crate::domain::{Entry, Platform};

#[derive(Debug, Deserialize)]
struct YouTubeFeed {
    author: Author,
    #[serde(rename = "entry", default)]
    entries: Vec<YouTubeEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Author {
    name: String,
}

// Element names are matched without their prefix: `yt:videoId` is `videoId`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct YouTubeEntry {
    #[serde(rename = "videoId")]
    video_id: String,
    title: String,
    author: Author,
    published: String,
    group: MediaGroup,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MediaGroup {
    thumbnail: Thumbnail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Thumbnail {
    #[serde(rename = "@url")]
    url: String,
}

fn parse(body: &[u8]) -> Result<YouTubeFeed> {
    quick_xml::de::from_reader(body).map_err(|source| VidfeedError::Parse {
        platform: Platform::YouTube,
        source,
    })
}

pub(super) fn normalize(body: &[u8]) -> Result<Vec<Entry>> {
    let feed = parse(body)?;

    tracing::trace!(channel = %feed.author.name, entries = feed.entries.len(), "Parsed YouTube feed");

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| Entry {
            platform: Platform::YouTube,
            published_at: entry.published,
            title: entry.title,
            author: entry.author.name,
            video_ref: entry.video_id,
            thumbnail_url: entry.group.thumbnail.url,
        })
        .collect();

    Ok(entries)
}

/// The channel's display name, taken from the feed-level author.
pub(super) fn channel_name(body: &[u8]) -> Result<String> {
    Ok(parse(body)?.author.name)
}
