//! Arena-backed navigation tree.
//!
//! [`NavTree`] flattens the renderer's nested [`NodeSpec`] input into a vector
//! of [`TreeNode`]s with parent links. Ids follow document (pre-order) order,
//! which keeps `folders()`/`items()` ordered without sorting and makes
//! `ancestors_of` a walk of parent pointers.

use super::error::{DocnavError, Result};
use super::node::{NodeId, NodeKind, NodeSpec, TreeNode};
use super::view::TreeView;

/// The sidebar tree supplied by the page renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
}

impl NavTree {
    /// Builds a tree from top-level node specs.
    ///
    /// Titles are trimmed. The active flag is honoured on items only and the
    /// expanded flag on folders only.
    ///
    /// # Errors
    ///
    /// Returns [`DocnavError::Tree`] if an item declares children.
    ///
    /// # Examples
    ///
    /// ```
    /// use docnav::domain::{NavTree, NodeSpec, TreeView};
    ///
    /// let tree = NavTree::from_specs(vec![NodeSpec::folder(
    ///     "Guides",
    ///     vec![NodeSpec::item("Install"), NodeSpec::item("Quickstart").active()],
    /// )])?;
    /// assert_eq!(tree.folders().len(), 1);
    /// assert_eq!(tree.items().len(), 2);
    /// # Ok::<(), docnav::DocnavError>(())
    /// ```
    pub fn from_specs(specs: Vec<NodeSpec>) -> Result<Self> {
        let mut tree = Self::default();
        for spec in specs {
            let id = tree.push_spec(spec, None)?;
            tree.roots.push(id);
        }

        tracing::debug!(
            nodes = tree.nodes.len(),
            roots = tree.roots.len(),
            "navigation tree built"
        );
        Ok(tree)
    }

    /// Parses a JSON array of node specs (see [`NodeSpec`] for the format).
    ///
    /// # Errors
    ///
    /// Returns [`DocnavError::Serialization`] for malformed JSON and
    /// [`DocnavError::Tree`] for structurally invalid trees.
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<NodeSpec> = serde_json::from_str(json)
            .map_err(|e| DocnavError::Serialization(format!("failed to parse tree: {e}")))?;
        Self::from_specs(specs)
    }

    fn push_spec(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> Result<NodeId> {
        if spec.kind == NodeKind::Item && !spec.children.is_empty() {
            return Err(DocnavError::Tree(format!(
                "item '{}' cannot have children",
                spec.title.trim()
            )));
        }

        let id = NodeId(self.nodes.len());
        let is_folder = spec.kind == NodeKind::Folder;
        self.nodes.push(TreeNode {
            kind: spec.kind,
            title: spec.title.trim().to_string(),
            is_active: !is_folder && spec.active,
            expanded: is_folder && spec.expanded,
            visible: true,
            search_match: false,
            anchor: spec.anchor,
            parent,
            children: Vec::new(),
        });

        let mut children = Vec::with_capacity(spec.children.len());
        for child in spec.children {
            children.push(self.push_spec(child, Some(id))?);
        }
        self.nodes[id.0].children = children;

        Ok(id)
    }

    /// Top-level node ids in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// First node (document order) whose title equals `title`.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<NodeId> {
        let title = title.trim();
        self.iter().find(|(_, n)| n.title == title).map(|(id, _)| id)
    }

    /// Number of ancestors above `id`; roots have depth 0.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors_of(id).len()
    }

    /// Whether an item links to the in-page anchor `target` (with or without `#`).
    #[must_use]
    pub fn has_anchor(&self, target: &str) -> bool {
        let target = target.trim_start_matches('#');
        self.nodes.iter().any(|n| {
            n.anchor
                .as_deref()
                .is_some_and(|a| a.trim_start_matches('#') == target)
        })
    }
}

impl TreeView for NavTree {
    fn folders(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, n)| n.is_folder())
            .map(|(id, _)| id)
            .collect()
    }

    fn items(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, n)| n.is_item())
            .map(|(id, _)| id)
            .collect()
    }

    fn ancestors_of(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.node(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.node(parent).and_then(|n| n.parent);
        }
        ancestors
    }

    fn descendants_of(&self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = node.children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(child) = self.node(next) {
                stack.extend(child.children.iter().rev().copied());
            }
        }
        out
    }

    fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id.0)
    }
}
