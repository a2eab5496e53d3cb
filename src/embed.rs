//! Embed URL lookup for Rumble videos.
//!
//! Rumble feed items only carry the watch page; the embeddable player URL is
//! found in the page's structured data (`"embedUrl": "https://rumble.com/embed/…/"`).

use std::sync::LazyLock;

use regex::Regex;

use crate::app::{Result, VidfeedError};
use crate::fetcher::Fetcher;

static RE_RUMBLE_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https://rumble\.com/embed/[a-zA-Z0-9]+/").expect("embed URL pattern is valid")
});

/// Extract the embed URL from a Rumble watch page.
///
/// Only the first line mentioning `embedUrl` is considered.
pub fn find_embed_url(page: &str) -> Option<String> {
    let line = page.lines().find(|line| line.contains("embedUrl"))?;
    RE_RUMBLE_EMBED.find(line).map(|m| m.as_str().to_string())
}

/// Fetch a Rumble watch page and return its embed URL.
pub async fn lookup_rumble_embed(
    fetcher: &(dyn Fetcher + Send + Sync),
    video_url: &str,
) -> Result<String> {
    let body = fetcher.fetch(video_url).await?;
    let page = String::from_utf8_lossy(&body);

    find_embed_url(&page).ok_or_else(|| VidfeedError::EmbedNotFound(video_url.to_string()))
}
