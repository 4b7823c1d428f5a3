//! JSON file-based storage backend.
//!
//! This module provides a human-readable key-value store persisted as a single
//! JSON document. Writes use write-to-temp + rename so a crash never leaves a
//! half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the document is loaded into memory once
//! - **Write**: O(n) - the whole document is rewritten on every change
//! - **Best for**: a handful of small slots written on user interaction

use crate::domain::error::{DocnavError, Result};
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const STORAGE_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Slot values by key. Values are opaque strings.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// Keeps all slots in memory and rewrites the file after each modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "tree-nav-state": "{\"Guides\":true}"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStorage {
    file_path: PathBuf,
    data: StorageData,

    /// Set when `data` has changes not yet written to disk.
    dirty: bool,
}

impl JsonFileStorage {
    /// Creates or opens a JSON storage file.
    ///
    /// If the file exists its slots are loaded; otherwise storage starts empty
    /// and the file is created on the first write. A file that does not parse
    /// is treated as absent and overwritten by the next write. Parent
    /// directories are created eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file was written by a newer storage version
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use docnav::storage::JsonFileStorage;
    ///
    /// let storage = JsonFileStorage::new("/tmp/docnav/state.json")?;
    /// # Ok::<(), docnav::DocnavError>(())
    /// ```
    pub fn new(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON storage");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("storage file absent, starting empty");
            StorageData::default()
        };

        tracing::debug!(entries = data.entries.len(), "storage opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "storage file is corrupt, starting empty");
                return Ok(StorageData::default());
            }
        };

        if data.version > STORAGE_VERSION {
            return Err(DocnavError::Storage(format!(
                "unsupported storage version {}",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );
        Ok(data)
    }

    /// Writes the document to disk atomically if it changed.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DocnavError::Storage(format!("failed to serialize storage: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_item", key = %key, bytes = value.len()).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.data.entries.remove(key).is_some() {
            self.dirty = true;
            self.save_to_file()?;
        }
        Ok(())
    }
}

impl Drop for JsonFileStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty storage on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save storage on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut storage = JsonFileStorage::new(&path).unwrap();
        storage.set_item("tree-nav-state", r#"{"Guides":true}"#).unwrap();
        drop(storage);

        let reopened = JsonFileStorage::new(&path).unwrap();
        assert_eq!(
            reopened.get_item("tree-nav-state").unwrap().as_deref(),
            Some(r#"{"Guides":true}"#)
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn missing_key_is_none() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("state.json")).unwrap();
        assert_eq!(storage.get_item("absent").unwrap(), None);
    }

    #[test]
    fn remove_item_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut storage = JsonFileStorage::new(&path).unwrap();
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        storage.remove_item("never-there").unwrap();
        drop(storage);

        let reopened = JsonFileStorage::new(&path).unwrap();
        assert_eq!(reopened.get_item("k").unwrap(), None);
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{{{ definitely not json").unwrap();

        let mut storage = JsonFileStorage::new(&path).unwrap();
        assert_eq!(storage.get_item("tree-nav-state").unwrap(), None);

        storage.set_item("tree-nav-state", "{}").unwrap();
        let reopened = JsonFileStorage::new(&path).unwrap();
        assert_eq!(reopened.get_item("tree-nav-state").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"version": 99, "entries": {}}"#).unwrap();

        assert!(JsonFileStorage::new(&path).is_err());
    }
}
