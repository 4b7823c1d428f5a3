//! Event handling for the tree navigation controller.
//!
//! The host translates DOM events into [`Event`]s and feeds them to
//! [`handle_event`] one at a time. Each call mutates the controller and
//! reports whether the sidebar needs re-rendering plus any [`Action`]s to
//! perform.
//!
//! ```text
//! DOM event → Event → handle_event → controller mutation → (render?, Actions)
//! ```
//!
//! # Example
//!
//! ```rust
//! use docnav::domain::{NavTree, NodeSpec};
//! use docnav::nav::{handle_event, Event, NavOptions, StatePersistence, TreeNavController};
//! use docnav::storage::MemoryStorage;
//! use std::time::Instant;
//!
//! let tree = NavTree::from_specs(vec![NodeSpec::folder("Guides", vec![NodeSpec::item("Install")])])?;
//! let store = StatePersistence::new(MemoryStorage::new());
//! let mut nav = TreeNavController::new(tree, store, NavOptions::default());
//! nav.initialize();
//!
//! let (render, actions) = handle_event(&mut nav, &Event::SidebarToggleClicked, Instant::now());
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), docnav::DocnavError>(())
//! ```

use crate::domain::NodeId;
use crate::nav::actions::Action;
use crate::nav::controller::TreeNavController;
use crate::nav::persistence::StateStore;
use crate::nav::sidebar::ClickTarget;
use std::time::Instant;

/// Host events relevant to navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A folder header was clicked.
    FolderHeaderClicked(NodeId),

    /// The search input value changed.
    SearchInput(String),

    /// Escape was pressed inside the search input.
    SearchEscape,

    /// The explicit clear control was clicked.
    SearchCleared,

    /// A timer or animation frame gave the controller a chance to fire
    /// pending work.
    Tick,

    /// The sidebar toggle was clicked.
    SidebarToggleClicked,

    /// A click anywhere in the document.
    DocumentClicked(ClickTarget),

    /// An in-page anchor link was clicked.
    AnchorClicked {
        /// The link's `href`, e.g. `#install`.
        href: String,
        /// Whether the page has an element matching the href. Anchors
        /// declared on the tree's own items count even when this is false.
        target_exists: bool,
    },
}

/// Processes one event and returns `(needs_render, actions)`.
///
/// Each call creates a debug-level span carrying the event.
pub fn handle_event<S: StateStore>(
    nav: &mut TreeNavController<S>,
    event: &Event,
    now: Instant,
) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::FolderHeaderClicked(id) => (nav.toggle_folder(*id), vec![]),
        Event::SearchInput(value) => {
            nav.input(value.clone(), now);
            (false, vec![])
        }
        Event::SearchEscape => (nav.escape().is_some(), vec![]),
        Event::SearchCleared => match nav.clear_search() {
            Some(_) => (true, vec![Action::FocusSearchInput]),
            None => (false, vec![]),
        },
        Event::Tick => (nav.tick(now).is_some(), vec![]),
        Event::SidebarToggleClicked => (nav.toggle_sidebar(), vec![]),
        Event::DocumentClicked(target) => (nav.click(*target), vec![]),
        Event::AnchorClicked { href, target_exists } => {
            let target = href.strip_prefix('#').unwrap_or_default();
            if target.is_empty() || !(*target_exists || nav.tree().has_anchor(target)) {
                tracing::debug!(href = %href, "anchor target missing, ignoring");
                return (false, vec![]);
            }
            (
                false,
                vec![Action::ScrollIntoView {
                    target: target.to_string(),
                }],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NavTree, NodeSpec};
    use crate::nav::controller::NavOptions;
    use crate::nav::persistence::StatePersistence;
    use crate::storage::MemoryStorage;
    use std::time::Duration;

    fn nav() -> TreeNavController<StatePersistence<MemoryStorage>> {
        let tree = NavTree::from_specs(vec![NodeSpec::folder(
            "Guides",
            vec![NodeSpec::item("Install"), NodeSpec::item("Quickstart")],
        )])
        .unwrap();
        let mut nav = TreeNavController::new(
            tree,
            StatePersistence::new(MemoryStorage::new()),
            NavOptions::default(),
        );
        nav.initialize();
        nav
    }

    #[test]
    fn typing_renders_only_after_quiet_period() {
        let mut nav = nav();
        let start = Instant::now();

        for (i, ch) in ["q", "qu", "qui"].into_iter().enumerate() {
            let now = start + Duration::from_millis(50 * i as u64);
            assert_eq!(handle_event(&mut nav, &Event::Tick, now), (false, vec![]));
            assert_eq!(
                handle_event(&mut nav, &Event::SearchInput(ch.to_string()), now),
                (false, vec![])
            );
        }

        let (render, _) = handle_event(&mut nav, &Event::Tick, start + Duration::from_millis(350));
        assert!(render);
        assert_eq!(nav.applied_query(), "qui");
    }

    #[test]
    fn clear_requests_focus() {
        let mut nav = nav();
        let (render, actions) = handle_event(&mut nav, &Event::SearchCleared, Instant::now());
        assert!(render);
        assert_eq!(actions, vec![Action::FocusSearchInput]);
    }

    #[test]
    fn anchor_clicks_scroll_when_target_exists() {
        let mut nav = nav();
        let now = Instant::now();

        let (_, actions) = handle_event(
            &mut nav,
            &Event::AnchorClicked {
                href: "#install".to_string(),
                target_exists: true,
            },
            now,
        );
        assert_eq!(
            actions,
            vec![Action::ScrollIntoView {
                target: "install".to_string()
            }]
        );

        for (href, exists) in [("#gone", false), ("#", true)] {
            let (_, actions) = handle_event(
                &mut nav,
                &Event::AnchorClicked {
                    href: href.to_string(),
                    target_exists: exists,
                },
                now,
            );
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn anchor_declared_on_tree_item_scrolls() {
        let tree = NavTree::from_specs(vec![NodeSpec::folder(
            "Guides",
            vec![NodeSpec::item("Install").with_anchor("install")],
        )])
        .unwrap();
        let mut nav = TreeNavController::new(
            tree,
            StatePersistence::new(MemoryStorage::new()),
            NavOptions::default(),
        );
        nav.initialize();

        let click = |href: &str| Event::AnchorClicked {
            href: href.to_string(),
            target_exists: false,
        };
        let (render, actions) = handle_event(&mut nav, &click("#install"), Instant::now());
        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::ScrollIntoView {
                target: "install".to_string()
            }]
        );

        let (_, actions) = handle_event(&mut nav, &click("#quickstart"), Instant::now());
        assert!(actions.is_empty());
    }

    #[test]
    fn folder_click_toggles() {
        let mut nav = nav();
        let (render, _) = handle_event(&mut nav, &Event::FolderHeaderClicked(NodeId(0)), Instant::now());
        assert!(render);
        assert!(nav.expand_state().get("Guides").unwrap());
    }
}
