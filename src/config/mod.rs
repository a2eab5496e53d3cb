//! Configuration management for vidfeed.
//!
//! Configuration is read from `~/.config/vidfeed/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! Command-line flags override values loaded here.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::Platform;

pub const RUMBLE_FEED_URL: &str = "http://rssgen.xyz/rumble/";
pub const ODYSEE_FEED_URL: &str = "https://odysee.com/$/rss/@";
pub const YOUTUBE_FEED_URL: &str = "https://www.youtube.com/feeds/videos.xml?channel_id=";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SUBS_FILE: &str = "subs.json";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feeds: FeedsConfig,
    pub aggregator: AggregatorConfig,
    pub server: ServerConfig,
}

/// Upstream feed endpoints and HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// Base URL the Rumble channel slug is appended to
    pub rumble_url: String,
    /// Base URL the Odysee `name:claimID` handle is appended to
    pub odysee_url: String,
    /// Base URL the YouTube channel UID is appended to
    pub youtube_url: String,
    /// Per-request timeout. Unset means the transport default.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            rumble_url: RUMBLE_FEED_URL.to_string(),
            odysee_url: ODYSEE_FEED_URL.to_string(),
            youtube_url: YOUTUBE_FEED_URL.to_string(),
            timeout_secs: None,
            user_agent: concat!("vidfeed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FeedsConfig {
    pub fn base_url(&self, platform: Platform) -> &str {
        match platform {
            Platform::Rumble => &self.rumble_url,
            Platform::Odysee => &self.odysee_url,
            Platform::YouTube => &self.youtube_url,
        }
    }

    /// Feed URL for one channel: the identifier is appended verbatim.
    pub fn feed_url(&self, platform: Platform, identifier: &str) -> String {
        format!("{}{}", self.base_url(platform), identifier)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Point every platform at the same host, keeping the upstream path shapes.
    ///
    /// Used to run against a local mirror or a mock server.
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            rumble_url: format!("{}/rumble/", host),
            odysee_url: format!("{}/$/rss/@", host),
            youtube_url: format!("{}/feeds/videos.xml?channel_id=", host),
            ..Self::default()
        }
    }
}

/// Aggregation engine settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Maximum feeds fetched at once. 0 fetches every subscription at once.
    pub max_concurrency: usize,
}

/// HTTP front-end settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub subs_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            subs_file: PathBuf::from(DEFAULT_SUBS_FILE),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/vidfeed/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("vidfeed").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(path = %path.display(), "Created default config");
        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# vidfeed configuration

[feeds]
# Channel identifiers are appended to these URLs as-is
rumble_url = "http://rssgen.xyz/rumble/"
odysee_url = "https://odysee.com/$/rss/@"
youtube_url = "https://www.youtube.com/feeds/videos.xml?channel_id="

# Request timeout in seconds (unset: no client-side timeout)
# timeout_secs = 30

# User-Agent header (default: vidfeed/<version>)
# user_agent = "vidfeed"

[aggregator]
# Maximum feeds fetched at once (0: every subscription at once)
max_concurrency = 0

[server]
port = 8000
subs_file = "subs.json"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.feeds.rumble_url, RUMBLE_FEED_URL);
        assert_eq!(config.feeds.odysee_url, ODYSEE_FEED_URL);
        assert_eq!(config.feeds.youtube_url, YOUTUBE_FEED_URL);
        assert_eq!(config.feeds.timeout_secs, None);
        assert_eq!(config.aggregator.max_concurrency, 0);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.feeds.user_agent, FeedsConfig::default().user_agent);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[feeds]
timeout_secs = 15

[server]
port = 9000
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.feeds.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.server.port, 9000);
        // Defaults
        assert_eq!(config.feeds.youtube_url, YOUTUBE_FEED_URL);
        assert_eq!(config.server.subs_file, PathBuf::from(DEFAULT_SUBS_FILE));
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.feeds.rumble_url, RUMBLE_FEED_URL);
        assert_eq!(config.aggregator.max_concurrency, 0);
    }

    #[test]
    fn test_feed_url_appends_identifier_verbatim() {
        let feeds = FeedsConfig::default();
        assert_eq!(
            feeds.feed_url(Platform::YouTube, "UCabcdefghijklmnopqrstuv"),
            "https://www.youtube.com/feeds/videos.xml?channel_id=UCabcdefghijklmnopqrstuv"
        );
        assert_eq!(
            feeds.feed_url(Platform::Odysee, "alice:abc"),
            "https://odysee.com/$/rss/@alice:abc"
        );
        assert_eq!(
            feeds.feed_url(Platform::Rumble, "SomeChannel"),
            "http://rssgen.xyz/rumble/SomeChannel"
        );
    }

    #[test]
    fn test_with_host() {
        let feeds = FeedsConfig::with_host("http://127.0.0.1:4000/");
        assert_eq!(
            feeds.feed_url(Platform::Rumble, "chan"),
            "http://127.0.0.1:4000/rumble/chan"
        );
        assert_eq!(
            feeds.feed_url(Platform::Odysee, "a:b"),
            "http://127.0.0.1:4000/$/rss/@a:b"
        );
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
