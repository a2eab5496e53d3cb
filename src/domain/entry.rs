use serde::{Deserialize, Serialize};

use super::Platform;

/// A single video, normalized from one platform's feed item.
///
/// `published_at` keeps the platform's own timestamp format (RFC 2822 for the
/// RSS feeds, RFC 3339 for YouTube's Atom feed); entries from different
/// platforms do not sort meaningfully against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Service")]
    pub platform: Platform,
    #[serde(rename = "Date")]
    pub published_at: String,
    #[serde(rename = "VidName")]
    pub title: String,
    #[serde(rename = "UserName")]
    pub author: String,
    /// A raw video ID or an embed URL, depending on the platform
    #[serde(rename = "VidID")]
    pub video_ref: String,
    #[serde(rename = "VidImg")]
    pub thumbnail_url: String,
}

impl Entry {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

/// Output of one aggregation run, in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    #[serde(rename = "Entries", default)]
    pub entries: Vec<Entry>,
}

impl AggregationResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_for(&self, platform: Platform) -> usize {
        self.entries
            .iter()
            .filter(|e| e.platform == platform)
            .count()
    }
}
