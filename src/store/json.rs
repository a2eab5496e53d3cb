use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::app::{Result, VidfeedError};
use crate::domain::SubscriptionSet;
use crate::store::Store;

/// Serialize with one-space indentation, the layout of existing subscription files.
pub fn to_indented_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Subscriptions kept in a single JSON file: `{"Subs": [...]}`.
///
/// Every save writes the whole set to a temporary sibling, syncs it and
/// renames it over the file. There is no file locking.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty subscription list if the file does not exist yet.
    ///
    /// Returns whether a file was created.
    pub fn create_if_missing(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&SubscriptionSet::new())?;
        tracing::info!(path = %self.path.display(), "Created empty subscriptions file");
        Ok(true)
    }

    /// The file's bytes exactly as stored.
    pub fn read_raw(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|source| self.io_error(source))
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "subs.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }

    fn io_error(&self, source: std::io::Error) -> VidfeedError {
        VidfeedError::StorageIo {
            path: self.path.clone(),
            source,
        }
    }

    fn format_error(&self, source: serde_json::Error) -> VidfeedError {
        VidfeedError::StorageFormat {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<SubscriptionSet> {
        let bytes = self.read_raw()?;
        serde_json::from_slice(&bytes).map_err(|source| self.format_error(source))
    }

    fn save(&self, subs: &SubscriptionSet) -> Result<()> {
        let bytes = to_indented_json(subs).map_err(|source| self.format_error(source))?;

        let temp = self.temp_path();
        if let Err(source) = write_synced(&temp, &bytes).and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(source));
        }

        tracing::debug!(path = %self.path.display(), subscriptions = subs.len(), "Saved subscriptions");
        Ok(())
    }
}
