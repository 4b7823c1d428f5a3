//! Toolkit-independent view over a navigation tree.
//!
//! [`TreeView`] is the seam between the navigation logic and whatever holds
//! the actual nodes. The reconciler and search engine only speak this trait,
//! so they run unchanged against [`NavTree`](super::NavTree) or a synthetic
//! tree in tests.

use super::node::{NodeId, TreeNode};
use serde::{Deserialize, Serialize};

/// How a folder is identified in persisted expand state.
///
/// `Title` keys by the trimmed folder title, which is compatible with state
/// written by earlier page scripts but conflates same-named folders at
/// different paths. `Path` keys by the `/`-joined titles from the root down to
/// the folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderIdentity {
    #[default]
    Title,
    Path,
}

impl FolderIdentity {
    /// Parses `"title"` or `"path"` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "path" => Some(Self::Path),
            _ => None,
        }
    }
}

/// Read/write access to a tree of folders and items.
///
/// Implementors provide node lookup and traversal; the derived queries used by
/// the state logic come as provided methods.
pub trait TreeView {
    /// All folder ids in document order.
    fn folders(&self) -> Vec<NodeId>;

    /// All item ids in document order.
    fn items(&self) -> Vec<NodeId>;

    /// Ancestors of `id`, nearest parent first, up to the root.
    fn ancestors_of(&self, id: NodeId) -> Vec<NodeId>;

    /// All descendants of `id` in document order, excluding `id` itself.
    fn descendants_of(&self, id: NodeId) -> Vec<NodeId>;

    fn node(&self, id: NodeId) -> Option<&TreeNode>;

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode>;

    /// Persistence key of a folder under the given identity scheme.
    ///
    /// Returns `None` for unknown ids, items, and folders whose title is empty
    /// after trimming.
    fn folder_key(&self, id: NodeId, identity: FolderIdentity) -> Option<String> {
        let node = self.node(id).filter(|n| n.is_folder())?;
        let title = node.title.trim();
        if title.is_empty() {
            return None;
        }

        match identity {
            FolderIdentity::Title => Some(title.to_string()),
            FolderIdentity::Path => {
                let mut segments: Vec<String> = self
                    .ancestors_of(id)
                    .into_iter()
                    .rev()
                    .filter_map(|a| self.node(a).map(|n| n.title.trim().to_string()))
                    .collect();
                segments.push(title.to_string());
                Some(segments.join("/"))
            }
        }
    }

    /// Whether any item below `id` carries the active flag.
    fn contains_active_item(&self, id: NodeId) -> bool {
        self.descendants_of(id)
            .into_iter()
            .filter_map(|d| self.node(d))
            .any(|n| n.is_item() && n.is_active)
    }

    /// Number of visible items below `id`.
    fn visible_item_count(&self, id: NodeId) -> usize {
        self.descendants_of(id)
            .into_iter()
            .filter_map(|d| self.node(d))
            .filter(|n| n.is_item() && n.visible)
            .count()
    }
}
