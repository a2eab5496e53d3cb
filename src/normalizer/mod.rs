//! Per-platform feed parsing.
//!
//! Each platform publishes a different XML dialect; the submodules hold the
//! schema for the handful of fields consumed and map them onto [`Entry`].

pub mod odysee;
mod rss;
mod rumble;
mod youtube;

use crate::app::Result;
use crate::domain::{Entry, Platform, Subscription};

#[derive(Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse one platform's feed body into entries for `sub`.
    pub fn normalize(&self, sub: &Subscription, body: &[u8]) -> Result<Vec<Entry>> {
        match sub.platform {
            Platform::Rumble => rumble::normalize(body, sub),
            Platform::Odysee => odysee::normalize(body, sub),
            Platform::YouTube => youtube::normalize(body),
        }
    }

    /// Read the channel display name out of a YouTube feed.
    pub fn youtube_channel_name(&self, body: &[u8]) -> Result<String> {
        youtube::channel_name(body)
    }
}
