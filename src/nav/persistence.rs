//! Loading and saving folder expand state.
//!
//! [`StatePersistence`] is the only component that touches the storage slot.
//! It never fails outward: a missing slot, a malformed blob, or a storage
//! access error all load as an empty [`ExpandState`], and a failed save is
//! logged and dropped so the in-memory tree stays authoritative for the
//! session.

use crate::domain::{FolderIdentity, TreeView};
use crate::storage::{ExpandState, Storage};

/// Storage key used by existing page scripts.
pub const DEFAULT_STATE_KEY: &str = "tree-nav-state";

/// Injected load/save seam for expand state.
///
/// The controller is generic over this trait so tests can drop in a fake
/// without any storage medium.
pub trait StateStore {
    /// Returns the persisted mapping, or an empty one on any failure.
    fn load(&self) -> ExpandState;

    /// Overwrites the persisted mapping with `state`. Failures are swallowed.
    fn save(&mut self, state: &ExpandState);
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn load(&self) -> ExpandState {
        (**self).load()
    }

    fn save(&mut self, state: &ExpandState) {
        (**self).save(state);
    }
}

/// Builds a fresh mapping from the current expanded flag of every folder.
///
/// Folders without a usable key (empty title) are skipped. When several
/// folders share a key the last one in document order wins.
pub fn capture<T: TreeView>(tree: &T, identity: FolderIdentity) -> ExpandState {
    tree.folders()
        .into_iter()
        .filter_map(|id| {
            let key = tree.folder_key(id, identity)?;
            let expanded = tree.node(id)?.expanded;
            Some((key, expanded))
        })
        .collect()
}

/// [`StateStore`] writing JSON into a single slot of a [`Storage`] backend.
///
/// # Examples
///
/// ```
/// use docnav::nav::{StatePersistence, StateStore};
/// use docnav::storage::{ExpandState, MemoryStorage};
///
/// let mut persistence = StatePersistence::new(MemoryStorage::new());
/// persistence.save(&ExpandState::from([("Guides", true)]));
/// assert_eq!(persistence.load().get("Guides"), Some(true));
///
/// let broken = StatePersistence::new(MemoryStorage::disabled());
/// assert!(broken.load().is_empty());
/// ```
#[derive(Debug)]
pub struct StatePersistence<S> {
    storage: S,
    key: String,
}

impl<S: Storage> StatePersistence<S> {
    /// Persistence under [`DEFAULT_STATE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STATE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Snapshots `tree` with [`capture`] and saves the result.
    pub fn save_tree<T: TreeView>(&mut self, tree: &T, identity: FolderIdentity) -> ExpandState {
        let state = capture(tree, identity);
        self.save(&state);
        state
    }
}

impl<S: Storage> StateStore for StatePersistence<S> {
    fn load(&self) -> ExpandState {
        let _span = tracing::debug_span!("load_expand_state", key = %self.key).entered();

        match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => ExpandState::from_json(&raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "stored expand state is malformed, using empty state");
                ExpandState::new()
            }),
            Ok(None) => {
                tracing::debug!("no stored expand state");
                ExpandState::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "expand state unavailable, using empty state");
                ExpandState::new()
            }
        }
    }

    fn save(&mut self, state: &ExpandState) {
        let _span = tracing::debug_span!("save_expand_state", key = %self.key, folders = state.len())
            .entered();

        let result = state
            .to_json()
            .and_then(|json| self.storage.set_item(&self.key, &json));

        match result {
            Ok(()) => tracing::debug!("expand state saved"),
            Err(e) => tracing::warn!(error = %e, "failed to save expand state, keeping in-memory state"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NavTree, NodeSpec};
    use crate::storage::MemoryStorage;

    fn tree() -> NavTree {
        NavTree::from_specs(vec![
            NodeSpec::folder("Guides", vec![NodeSpec::item("Install")]).expanded(true),
            NodeSpec::folder("API", vec![NodeSpec::folder("Types", vec![])]),
        ])
        .unwrap()
    }

    #[test]
    fn corrupted_blob_loads_empty() {
        let storage = MemoryStorage::new().with_item(DEFAULT_STATE_KEY, "{\"Guides\": tru");
        let persistence = StatePersistence::new(storage);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn missing_slot_loads_empty() {
        let persistence = StatePersistence::new(MemoryStorage::new());
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn save_overwrites_instead_of_merging() {
        let storage = MemoryStorage::new().with_item(DEFAULT_STATE_KEY, r#"{"Removed": true}"#);
        let mut persistence = StatePersistence::new(storage);

        persistence.save_tree(&tree(), FolderIdentity::Title);

        let loaded = persistence.load();
        assert_eq!(loaded.get("Removed"), None);
        assert_eq!(loaded.get("Guides"), Some(true));
        assert_eq!(loaded.get("API"), Some(false));
        assert_eq!(loaded.get("Types"), Some(false));
    }

    #[test]
    fn save_failure_is_swallowed() {
        let mut persistence = StatePersistence::new(MemoryStorage::with_quota(4));
        let state = persistence.save_tree(&tree(), FolderIdentity::Title);
        assert_eq!(state.len(), 3);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn capture_uses_path_keys() {
        let state = capture(&tree(), FolderIdentity::Path);
        assert_eq!(state.get("API/Types"), Some(false));
        assert_eq!(state.get("Types"), None);
    }

    #[test]
    fn custom_key_is_respected() {
        let mut persistence = StatePersistence::with_key(MemoryStorage::new(), "other");
        persistence.save(&ExpandState::from([("A", true)]));
        assert_eq!(persistence.key(), "other");
        assert!(persistence.storage().get_item("other").unwrap().is_some());
        assert!(persistence.storage().get_item(DEFAULT_STATE_KEY).unwrap().is_none());
    }
}
