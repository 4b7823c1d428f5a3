//! Effective expand state of every folder.
//!
//! Each folder is decided independently:
//!
//! 1. It contains the active item → expanded, whatever was persisted.
//! 2. Its key is in the persisted mapping → the stored flag.
//! 3. Otherwise its current (markup-provided) flag is left alone.

use crate::domain::{FolderIdentity, TreeView};
use crate::storage::ExpandState;

/// Counts of how each folder was decided by one [`StateReconciler::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub forced_by_active: usize,
    pub restored: usize,
    pub untouched: usize,
}

/// Applies persisted and active-item derived state to a tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateReconciler {
    identity: FolderIdentity,
}

impl StateReconciler {
    #[must_use]
    pub const fn new(identity: FolderIdentity) -> Self {
        Self { identity }
    }

    #[must_use]
    pub const fn identity(&self) -> FolderIdentity {
        self.identity
    }

    /// Sets the expanded flag of every folder in `tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use docnav::domain::{FolderIdentity, NavTree, NodeSpec, TreeView};
    /// use docnav::nav::StateReconciler;
    /// use docnav::storage::ExpandState;
    ///
    /// let mut tree = NavTree::from_specs(vec![NodeSpec::folder(
    ///     "Guides",
    ///     vec![NodeSpec::item("Install"), NodeSpec::item("Quickstart").active()],
    /// )])?;
    /// let stored = ExpandState::from([("Guides", false)]);
    ///
    /// StateReconciler::new(FolderIdentity::Title).apply(&mut tree, &stored);
    /// let guides = tree.find_by_title("Guides").unwrap();
    /// assert!(tree.node(guides).unwrap().expanded);
    /// # Ok::<(), docnav::DocnavError>(())
    /// ```
    pub fn apply<T: TreeView>(&self, tree: &mut T, state: &ExpandState) -> ReconcileSummary {
        let _span = tracing::debug_span!("reconcile_tree", stored = state.len()).entered();

        let mut summary = ReconcileSummary::default();

        for folder in tree.folders() {
            let decision = if tree.contains_active_item(folder) {
                summary.forced_by_active += 1;
                Some(true)
            } else if let Some(stored) = tree
                .folder_key(folder, self.identity)
                .and_then(|key| state.get(&key))
            {
                summary.restored += 1;
                Some(stored)
            } else {
                summary.untouched += 1;
                None
            };

            if let (Some(expanded), Some(node)) = (decision, tree.node_mut(folder)) {
                node.expanded = expanded;
            }
        }

        tracing::debug!(
            forced_by_active = summary.forced_by_active,
            restored = summary.restored,
            untouched = summary.untouched,
            "expand state reconciled"
        );
        summary
    }
}
