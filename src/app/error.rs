use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Platform;

#[derive(Error, Debug)]
pub enum VidfeedError {
    /// Subscription identifier rejected before any network call
    #[error("Invalid {platform} identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        platform: Platform,
        identifier: String,
        reason: &'static str,
    },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Feed parsing error ({platform}): {source}")]
    Parse {
        platform: Platform,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Failed to read/write subscriptions at {path}: {source}")]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed subscriptions at {path}: {source}")]
    StorageFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No embed URL found in {0}")]
    EmbedNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VidfeedError {
    /// True for failures reading or writing subscription state.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            VidfeedError::StorageIo { .. } | VidfeedError::StorageFormat { .. }
        )
    }

    pub(crate) fn invalid_identifier(
        platform: Platform,
        identifier: &str,
        reason: &'static str,
    ) -> Self {
        VidfeedError::InvalidIdentifier {
            platform,
            identifier: identifier.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, VidfeedError>;
