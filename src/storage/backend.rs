//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, a string key-value slot store
//! shaped like browser local storage. Only [`StatePersistence`] reads or writes
//! through it; everything else sees the decoded [`ExpandState`].
//!
//! [`StatePersistence`]: crate::nav::StatePersistence
//! [`ExpandState`]: crate::storage::ExpandState

use crate::domain::error::Result;

/// Abstraction over persistent key-value storage.
///
/// Every method may fail: storage can be disabled, over quota, or backed by a
/// file that cannot be read. Callers decide how to degrade.
///
/// # Implementations
///
/// - [`JsonFileStorage`](super::JsonFileStorage): JSON file with atomic writes
/// - [`MemoryStorage`](super::MemoryStorage): in-process map, optionally
///   disabled or quota limited
///
/// # Examples
///
/// ```
/// use docnav::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// storage.set_item("tree-nav-state", "{}")?;
/// assert_eq!(storage.get_item("tree-nav-state")?.as_deref(), Some("{}"));
/// # Ok::<(), docnav::DocnavError>(())
/// ```
pub trait Storage {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected (disabled storage, quota) or
    /// the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
