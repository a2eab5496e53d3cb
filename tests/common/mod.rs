//! Shared fixtures: feed bodies for each platform and a context wired to a mock server.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use vidfeed::app::AppContext;
use vidfeed::config::{Config, FeedsConfig};

pub const CHANNEL_ID: &str = "UCabcdefghijklmnopqrstuv";

pub fn youtube_feed(channel: &str, videos: &[(&str, &str)]) -> String {
    let entries: String = videos
        .iter()
        .map(|(id, title)| {
            format!(
                r#" <entry>
  <id>yt:video:{id}</id>
  <yt:videoId>{id}</yt:videoId>
  <yt:channelId>{CHANNEL_ID}</yt:channelId>
  <title>{title}</title>
  <link rel="alternate" href="https://www.youtube.com/watch?v={id}"/>
  <author>
   <name>{channel}</name>
   <uri>https://www.youtube.com/channel/{CHANNEL_ID}</uri>
  </author>
  <published>2024-01-02T15:00:00+00:00</published>
  <updated>2024-01-03T10:00:00+00:00</updated>
  <media:group>
   <media:title>{title}</media:title>
   <media:thumbnail url="https://i4.ytimg.com/vi/{id}/hqdefault.jpg" width="480" height="360"/>
  </media:group>
 </entry>
"#
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015" xmlns:media="http://search.yahoo.com/mrss/" xmlns="http://www.w3.org/2005/Atom">
 <link rel="self" href="http://www.youtube.com/feeds/videos.xml?channel_id={CHANNEL_ID}"/>
 <title>{channel}</title>
 <author>
  <name>{channel}</name>
  <uri>https://www.youtube.com/channel/{CHANNEL_ID}</uri>
 </author>
{entries}</feed>"#
    )
}

pub fn rumble_feed(videos: &[(&str, &str)]) -> String {
    let items: String = videos
        .iter()
        .map(|(guid, title)| {
            format!(
                r#"<item><title>{title}</title><pubDate>Mon, 01 Jan 2024 12:00:00 +0000</pubDate><guid isPermaLink="false">{guid}</guid><image href="https://sp.rmbl.ws/{guid}.jpg"/></item>"#
            )
        })
        .collect();
    format!(r#"<rss version="2.0"><channel><title>Rumble</title>{items}</channel></rss>"#)
}

pub fn odysee_feed(videos: &[(&str, &str)]) -> String {
    let items: String = videos
        .iter()
        .map(|(link, title)| {
            format!(
                r#"<item><title><![CDATA[{title}]]></title><itunes:title><![CDATA[{title}]]></itunes:title><link>{link}</link><pubDate>Sun, 31 Dec 2023 18:30:00 GMT</pubDate><author><![CDATA[@alice]]></author><itunes:author><![CDATA[@alice]]></itunes:author><itunes:image href="https://thumbs.odycdn.com/x.jpg"/></item>"#
            )
        })
        .collect();
    format!(
        r#"<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd"><channel><title>Alice</title>{items}</channel></rss>"#
    )
}

/// A context whose feeds point at `host` and whose subscriptions live in a temp dir.
pub fn context(host: &str) -> (AppContext, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.feeds = FeedsConfig::with_host(host);
    config.server.subs_file = dir.path().join("subs.json");

    let ctx = AppContext::new(config).unwrap();
    (ctx, dir)
}

pub fn subs_path(dir: &TempDir) -> PathBuf {
    dir.path().join("subs.json")
}
