//! View model types representing renderable sidebar state.
//!
//! View models are computed by
//! [`TreeNavController::compute_viewmodel`](crate::nav::TreeNavController::compute_viewmodel)
//! and consumed by the renderer. They hold no logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use docnav::domain::{NodeId, NodeKind};
//! use docnav::ui::{NavViewModel, RowView};
//!
//! let vm = NavViewModel {
//!     rows: vec![RowView {
//!         id: NodeId(0),
//!         depth: 0,
//!         kind: NodeKind::Item,
//!         title: "Install".to_string(),
//!         expanded: false,
//!         visible: true,
//!         shown: true,
//!         active: false,
//!         search_match: false,
//!         highlight: None,
//!     }],
//!     query: String::new(),
//!     searching: false,
//!     match_count: 0,
//!     sidebar_open: false,
//! };
//! assert_eq!(vm.shown_rows().count(), 1);
//! ```

use crate::domain::{NodeId, NodeKind};
use std::ops::Range;

/// Complete sidebar view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavViewModel {
    /// One row per node, in document order.
    pub rows: Vec<RowView>,

    /// Raw search input value.
    pub query: String,

    /// Whether a non-empty query is currently applied.
    pub searching: bool,

    /// Number of items flagged as search matches.
    pub match_count: usize,

    /// Whether the off-canvas sidebar is open.
    pub sidebar_open: bool,
}

impl NavViewModel {
    /// Rows the user can actually see.
    pub fn shown_rows(&self) -> impl Iterator<Item = &RowView> {
        self.rows.iter().filter(|r| r.shown)
    }
}

/// Display information for one folder or item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: NodeId,

    /// Number of ancestor folders.
    pub depth: usize,

    pub kind: NodeKind,
    pub title: String,

    /// Folder expand marker. Always `false` for items.
    pub expanded: bool,

    /// The node's own visibility attribute.
    pub visible: bool,

    /// Visible, and every ancestor is visible and expanded.
    pub shown: bool,

    pub active: bool,
    pub search_match: bool,

    /// Byte range of the query inside `title`, for match highlighting.
    pub highlight: Option<Range<usize>>,
}
