//! Substring search over tree items.
//!
//! A non-empty query shows matching items, flags them for highlighting and
//! forces every ancestor folder open and visible; non-matching items are
//! hidden, and folders left without a visible item are hidden afterwards.
//! An empty query clears all search markers and hands the expand state back
//! to the [`StateReconciler`].
//!
//! Search may force a folder expanded but never collapses one.

use crate::domain::TreeView;
use crate::nav::reconciler::StateReconciler;
use crate::storage::ExpandState;
use std::ops::Range;

/// Lowercases and trims raw input into the form [`SearchEngine::run`] expects.
///
/// # Examples
///
/// ```
/// use docnav::nav::normalize_query;
///
/// assert_eq!(normalize_query("  QuickStart "), "quickstart");
/// assert_eq!(normalize_query("   "), "");
/// ```
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Whether `title` contains the normalized `query`, ignoring case.
#[must_use]
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(query)
}

/// Byte range in `title` of the first case-insensitive occurrence of `query`.
///
/// Matching runs on the same whole-title lowercasing as [`title_matches`], so
/// every matching title yields a range. The range indexes the original title
/// and covers every character whose lowercase form overlaps the match.
///
/// # Examples
///
/// ```
/// use docnav::nav::match_range;
///
/// assert_eq!(match_range("QuickStart", "start"), Some(5..10));
/// assert_eq!(match_range("Install", "quick"), None);
/// ```
#[must_use]
pub fn match_range(title: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }

    let found = title.to_lowercase().find(query)?;
    let found_end = found + query.len();

    let mut start = None;
    let mut lowered_pos = 0;
    for (offset, ch) in title.char_indices() {
        let lowered_next = lowered_pos + ch.to_lowercase().map(char::len_utf8).sum::<usize>();
        if start.is_none() && found < lowered_next {
            start = Some(offset);
        }
        if found_end <= lowered_next {
            return start.map(|s| s..offset + ch.len_utf8());
        }
        lowered_pos = lowered_next;
    }
    None
}

/// Result of one [`SearchEngine::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Items matching the query; for an empty query, all items.
    pub matched: usize,

    /// Folders hidden for having no visible item.
    pub hidden_folders: usize,
}

/// Filters a tree by query, forcing matching branches open.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine {
    reconciler: StateReconciler,
}

impl SearchEngine {
    #[must_use]
    pub const fn new(reconciler: StateReconciler) -> Self {
        Self { reconciler }
    }

    /// Runs `query` against `tree`.
    ///
    /// `query` must already be normalized (see [`normalize_query`]). `state` is
    /// the mapping the reconciler restores from when the query is empty.
    pub fn run<T: TreeView>(&self, tree: &mut T, query: &str, state: &ExpandState) -> SearchOutcome {
        let _span = tracing::debug_span!("tree_search", query_len = query.len()).entered();

        let items = tree.items();
        let folders = tree.folders();

        for id in items.iter().chain(&folders) {
            if let Some(node) = tree.node_mut(*id) {
                node.search_match = false;
            }
        }

        if query.is_empty() {
            for id in items.iter().chain(&folders) {
                if let Some(node) = tree.node_mut(*id) {
                    node.visible = true;
                }
            }
            self.reconciler.apply(tree, state);
            tracing::debug!(items = items.len(), "search cleared");
            return SearchOutcome {
                matched: items.len(),
                hidden_folders: 0,
            };
        }

        let mut outcome = SearchOutcome::default();

        for &item in &items {
            let matched = tree.node(item).is_some_and(|n| title_matches(&n.title, query));

            if let Some(node) = tree.node_mut(item) {
                node.visible = matched;
                node.search_match = matched;
            }

            if matched {
                outcome.matched += 1;
                for ancestor in tree.ancestors_of(item) {
                    if let Some(folder) = tree.node_mut(ancestor) {
                        folder.expanded = true;
                        folder.visible = true;
                    }
                }
            }
        }

        for &folder in &folders {
            if tree.visible_item_count(folder) == 0 {
                if let Some(node) = tree.node_mut(folder) {
                    node.visible = false;
                    outcome.hidden_folders += 1;
                }
            }
        }

        tracing::debug!(
            matched = outcome.matched,
            hidden_folders = outcome.hidden_folders,
            "search applied"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FolderIdentity, NavTree, NodeSpec};

    fn tree() -> NavTree {
        NavTree::from_specs(vec![
            NodeSpec::folder(
                "Guides",
                vec![
                    NodeSpec::item("Install"),
                    NodeSpec::item("Quickstart").active(),
                    NodeSpec::folder("Deep", vec![NodeSpec::item("Quick tuning")]),
                ],
            ),
            NodeSpec::folder("API", vec![NodeSpec::item("Types")]),
            NodeSpec::folder("Empty", vec![]).expanded(true),
        ])
        .unwrap()
    }

    fn node<'a>(tree: &'a NavTree, title: &str) -> &'a crate::domain::TreeNode {
        let id = tree.find_by_title(title).unwrap();
        tree.node(id).unwrap()
    }

    #[test]
    fn matches_are_visible_and_flagged() {
        let mut tree = tree();
        let outcome = SearchEngine::default().run(&mut tree, "quick", &ExpandState::new());

        assert_eq!(outcome.matched, 2);
        assert!(node(&tree, "Quickstart").visible);
        assert!(node(&tree, "Quickstart").search_match);
        assert!(node(&tree, "Quick tuning").search_match);
        assert!(!node(&tree, "Install").visible);
        assert!(!node(&tree, "Types").visible);
    }

    #[test]
    fn ancestors_of_matches_are_open_and_visible() {
        let mut tree = tree();
        SearchEngine::default().run(&mut tree, "tuning", &ExpandState::new());

        for title in ["Guides", "Deep"] {
            assert!(node(&tree, title).visible, "{title} visible");
            assert!(node(&tree, title).expanded, "{title} expanded");
        }
    }

    #[test]
    fn folders_without_visible_items_are_hidden() {
        let mut tree = tree();
        let outcome = SearchEngine::default().run(&mut tree, "quick", &ExpandState::new());

        assert!(!node(&tree, "API").visible);
        assert!(!node(&tree, "Empty").visible);
        assert_eq!(outcome.hidden_folders, 2);
    }

    #[test]
    fn search_never_collapses() {
        let mut tree = tree();
        SearchEngine::default().run(&mut tree, "quick", &ExpandState::new());
        assert!(node(&tree, "Empty").expanded);
    }

    #[test]
    fn empty_query_restores_reconciled_state() {
        let state = ExpandState::from([("API", false), ("Deep", false)]);
        let engine = SearchEngine::new(StateReconciler::new(FolderIdentity::Title));

        let mut expected = tree();
        StateReconciler::default().apply(&mut expected, &state);

        let mut tree = tree();
        engine.run(&mut tree, "types", &state);
        engine.run(&mut tree, "zzz", &state);
        engine.run(&mut tree, "", &state);

        assert_eq!(tree, expected);
    }

    #[test]
    fn repeated_searches_reset_markers() {
        let mut tree = tree();
        let engine = SearchEngine::default();
        engine.run(&mut tree, "install", &ExpandState::new());
        engine.run(&mut tree, "types", &ExpandState::new());

        assert!(!node(&tree, "Install").search_match);
        assert!(!node(&tree, "Install").visible);
        assert!(node(&tree, "Types").search_match);
        assert!(node(&tree, "API").visible);
        assert!(!node(&tree, "Guides").visible);
    }

    #[test]
    fn match_range_maps_back_to_original_bytes() {
        assert_eq!(match_range("Über Install", "install"), Some(6..13));
        assert_eq!(match_range("abc", ""), None);
        assert_eq!(match_range("ab", "abc"), None);
    }

    #[test]
    fn every_matching_title_has_a_range() {
        let query = normalize_query("ΟΔΟΣ");
        assert!(title_matches("ΟΔΟΣ", &query));
        assert_eq!(match_range("ΟΔΟΣ", &query), Some(0..8));
        assert_eq!(match_range("Η ΟΔΟΣ", "οδος"), Some(3..11));

        assert_eq!(match_range("İstanbul", "stan"), Some(2..6));
    }

    #[test]
    fn normalize_then_match() {
        let query = normalize_query("  QUICK\t");
        assert!(title_matches("Quickstart", &query));
    }
}
