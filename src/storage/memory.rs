//! In-process storage backend.
//!
//! [`MemoryStorage`] keeps slots in a `HashMap`. It can also model the two
//! browser storage failure modes the navigation state must survive: storage
//! disabled outright, and writes rejected for exceeding a quota.

use crate::domain::error::{DocnavError, Result};
use crate::storage::backend::Storage;
use std::collections::HashMap;

/// Map-backed storage with optional failure modes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    disabled: bool,

    /// Maximum total bytes of keys plus values, if limited.
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every read and write.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Storage that rejects writes pushing the total size above `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Pre-populates a slot, bypassing quota checks.
    #[must_use]
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    fn ensure_enabled(&self) -> Result<()> {
        if self.disabled {
            Err(DocnavError::Storage("storage is disabled".to_string()))
        } else {
            Ok(())
        }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.ensure_enabled()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_enabled()?;

        if let Some(quota) = self.quota {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(DocnavError::Storage(format!(
                    "quota exceeded: {needed} bytes needed, {quota} allowed"
                )));
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.ensure_enabled()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_storage_rejects_everything() {
        let mut storage = MemoryStorage::disabled();
        assert!(storage.get_item("k").is_err());
        assert!(storage.set_item("k", "v").is_err());
        assert!(storage.remove_item("k").is_err());
    }

    #[test]
    fn quota_counts_replaced_value_once() {
        let mut storage = MemoryStorage::with_quota(10);
        storage.set_item("k", "123456789").unwrap();
        storage.set_item("k", "abcdefghi").unwrap();
        let err = storage.set_item("k", "0123456789").unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("abcdefghi"));
    }
}
