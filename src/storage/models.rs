//! Persisted record types.
//!
//! [`ExpandState`] is the only data this crate persists: a mapping from folder
//! key to expanded flag, serialized as a flat JSON object so blobs written by
//! earlier versions of the page script (`{"Guides": true}`) load unchanged.

use crate::domain::error::{DocnavError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of folder key to expanded flag.
///
/// Keys are folder titles or folder paths depending on the configured
/// [`FolderIdentity`](crate::domain::FolderIdentity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandState(BTreeMap<String, bool>);

impl ExpandState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored flag for `key`, `None` if the folder was never recorded.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, expanded: bool) {
        self.0.insert(key.into(), expanded);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Decodes a persisted blob.
    ///
    /// # Errors
    ///
    /// Returns [`DocnavError::Serialization`] if `raw` is not a JSON object of
    /// booleans.
    ///
    /// # Examples
    ///
    /// ```
    /// use docnav::storage::ExpandState;
    ///
    /// let state = ExpandState::from_json(r#"{"Guides": false}"#)?;
    /// assert_eq!(state.get("Guides"), Some(false));
    /// assert!(ExpandState::from_json("not json").is_err());
    /// # Ok::<(), docnav::DocnavError>(())
    /// ```
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| DocnavError::Serialization(format!("failed to parse expand state: {e}")))
    }

    /// Encodes the state as a compact JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`DocnavError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| DocnavError::Serialization(format!("failed to serialize expand state: {e}")))
    }
}

impl FromIterator<(String, bool)> for ExpandState {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ExpandState {
    fn from(entries: [(&str, bool); N]) -> Self {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}
