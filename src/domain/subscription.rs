use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::app::{Result, VidfeedError};

/// Length of a YouTube channel UID (`UC` followed by 22 characters).
pub const YOUTUBE_CHANNEL_ID_LEN: usize = 24;
pub const YOUTUBE_CHANNEL_ID_PREFIX: &str = "UC";

/// The content platforms a subscription can point at.
///
/// Serialized as the lowercase tag used in the subscriptions file
/// (`rumble`, `odysee`, `youtube`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Rumble channels, read through the rssgen.xyz generator
    Rumble,
    /// Odysee channels, `name:claimID` handles
    Odysee,
    /// YouTube channels, 24-char `UC…` UIDs
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Rumble, Platform::Odysee, Platform::YouTube];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Rumble => "rumble",
            Platform::Odysee => "odysee",
            Platform::YouTube => "youtube",
        }
    }

    /// Check the platform-specific identifier shape without touching the network.
    pub fn validate_identifier(self, identifier: &str) -> Result<()> {
        let invalid = |reason| Err(VidfeedError::invalid_identifier(self, identifier, reason));

        if identifier.is_empty() {
            return invalid("identifier is empty");
        }
        if identifier.chars().any(char::is_whitespace) {
            return invalid("identifier contains whitespace");
        }

        match self {
            Platform::Rumble => Ok(()),
            Platform::Odysee => match identifier.split_once(':') {
                Some((name, _)) if !name.is_empty() => Ok(()),
                Some(_) => invalid("expected name before ':'"),
                None => invalid("expected 'name:claimID'"),
            },
            Platform::YouTube => {
                if identifier.len() != YOUTUBE_CHANNEL_ID_LEN {
                    invalid("channel ID must be 24 characters")
                } else if !identifier.starts_with(YOUTUBE_CHANNEL_ID_PREFIX) {
                    invalid("channel ID must start with 'UC'")
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Display name derivable from the identifier alone.
    ///
    /// Returns `None` for YouTube, whose channel name has to be read from its feed.
    pub fn local_display_name(self, identifier: &str) -> Option<&str> {
        match self {
            Platform::Rumble => Some(identifier),
            Platform::Odysee => Some(identifier.split(':').next().unwrap_or(identifier)),
            Platform::YouTube => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rumble" => Ok(Platform::Rumble),
            "odysee" => Ok(Platform::Odysee),
            "youtube" => Ok(Platform::YouTube),
            other => Err(format!(
                "Unknown platform '{}'. Expected one of: rumble, odysee, youtube",
                other
            )),
        }
    }
}

/// One channel on one platform.
///
/// Field names follow the on-disk `{"Name", "UID", "Service"}` layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "UID")]
    pub id: String,
    #[serde(rename = "Service")]
    pub platform: Platform,
}

impl Subscription {
    pub fn new(name: impl Into<String>, id: impl Into<String>, platform: Platform) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            platform,
        }
    }
}

/// Insertion-ordered subscriptions with no duplicate `(name, id, platform)` tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSet {
    #[serde(rename = "Subs", default, deserialize_with = "read_subs")]
    subs: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subscription> {
        self.subs.iter()
    }

    pub fn as_slice(&self) -> &[Subscription] {
        &self.subs
    }

    pub fn contains(&self, sub: &Subscription) -> bool {
        self.subs.contains(sub)
    }

    /// Append `sub` unless the exact tuple is already present.
    ///
    /// Returns whether the set changed.
    pub fn insert(&mut self, sub: Subscription) -> bool {
        if self.contains(&sub) {
            return false;
        }
        self.subs.push(sub);
        true
    }

    /// Drop every subscription with this ID, on any platform.
    ///
    /// Returns the number removed.
    pub fn remove_id(&mut self, id: &str) -> usize {
        let before = self.subs.len();
        self.subs.retain(|s| s.id != id);
        before - self.subs.len()
    }
}

impl FromIterator<Subscription> for SubscriptionSet {
    fn from_iter<I: IntoIterator<Item = Subscription>>(iter: I) -> Self {
        let mut set = SubscriptionSet::new();
        for sub in iter {
            set.insert(sub);
        }
        set
    }
}

impl IntoIterator for SubscriptionSet {
    type Item = Subscription;
    type IntoIter = std::vec::IntoIter<Subscription>;

    fn into_iter(self) -> Self::IntoIter {
        self.subs.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubscriptionSet {
    type Item = &'a Subscription;
    type IntoIter = std::slice::Iter<'a, Subscription>;

    fn into_iter(self) -> Self::IntoIter {
        self.subs.iter()
    }
}

// Older subscription files store an empty list as `"Subs": null`, and may
// repeat a subscription. Loading goes through `insert` so the set stays
// duplicate-free.
fn read_subs<'de, D>(deserializer: D) -> std::result::Result<Vec<Subscription>, D::Error>
where
    D: Deserializer<'de>,
{
    let subs = Option::<Vec<Subscription>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(subs.into_iter().collect::<SubscriptionSet>().subs)
}
