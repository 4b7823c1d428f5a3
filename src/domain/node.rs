//! Node model for the navigation tree.
//!
//! The page renderer emits a static tree of folders and items. [`NodeSpec`] is
//! the serde-friendly nested shape of that input; [`TreeNode`] is the flattened
//! arena entry the navigation logic mutates.

use serde::{Deserialize, Serialize};

/// Index of a node inside a [`NavTree`](super::NavTree) arena.
///
/// Ids are assigned in document order (pre-order) when the tree is built, so
/// sorting ids reproduces the order nodes appear in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Whether a node is a folder or a leaf item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Item,
}

/// Nested description of a node, as emitted by the page renderer.
///
/// # Format
///
/// ```json
/// {
///   "kind": "folder",
///   "title": "Guides",
///   "expanded": false,
///   "children": [
///     { "kind": "item", "title": "Install" },
///     { "kind": "item", "title": "Quickstart", "active": true }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub kind: NodeKind,
    pub title: String,

    /// Set by the renderer on the item matching the current page.
    #[serde(default)]
    pub active: bool,

    /// Markup-provided default expand state for folders.
    #[serde(default)]
    pub expanded: bool,

    /// In-page anchor target for items (`#section`), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Creates a folder spec with the given children, collapsed by default.
    pub fn folder(title: impl Into<String>, children: Vec<NodeSpec>) -> Self {
        Self {
            kind: NodeKind::Folder,
            title: title.into(),
            active: false,
            expanded: false,
            anchor: None,
            children,
        }
    }

    /// Creates an inactive item spec.
    pub fn item(title: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Item,
            title: title.into(),
            active: false,
            expanded: false,
            anchor: None,
            children: Vec::new(),
        }
    }

    /// Marks this spec as the active page item.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Sets the markup-provided expand state of a folder.
    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Attaches an in-page anchor target.
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }
}

/// A folder or item inside the navigation arena.
///
/// `expanded` is only meaningful for folders; `search_match` only for items.
/// `visible` starts `true` and is driven by search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub kind: NodeKind,

    /// Display text, trimmed. Also the default persistence key for folders.
    pub title: String,

    pub is_active: bool,
    pub expanded: bool,
    pub visible: bool,
    pub search_match: bool,
    pub anchor: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    #[must_use]
    pub fn is_item(&self) -> bool {
        self.kind == NodeKind::Item
    }
}
