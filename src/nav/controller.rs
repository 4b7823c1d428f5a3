//! Tree navigation controller.
//!
//! [`TreeNavController`] owns the navigation tree, the injected
//! [`StateStore`], the in-memory [`ExpandState`], the search input with its
//! debounce timer, and the sidebar state. It is the single writer of all of
//! them: every handler runs to completion before the next event is processed,
//! so no intermediate tree state is ever observable.
//!
//! # Lifecycle
//!
//! ```text
//! page load ─▶ initialize()  load state, reconcile
//! header click ─▶ toggle_folder()  flip, capture, save
//! keystroke ─▶ input()  schedule ─▶ tick()  run search once quiet
//! Escape / clear ─▶ escape() / clear_search()  run("") immediately
//! ```

use crate::domain::{FolderIdentity, NavTree, NodeId, TreeView};
use crate::nav::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::nav::persistence::{capture, StateStore};
use crate::nav::reconciler::{ReconcileSummary, StateReconciler};
use crate::nav::search::{match_range, normalize_query, SearchEngine, SearchOutcome};
use crate::nav::sidebar::{ClickTarget, SidebarState};
use crate::storage::ExpandState;
use crate::ui::viewmodel::{NavViewModel, RowView};
use std::time::{Duration, Instant};

/// Which page controls the renderer actually emitted.
///
/// A feature whose control is missing disables itself instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub search_input: bool,
    pub sidebar_toggle: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            search_input: true,
            sidebar_toggle: true,
        }
    }
}

/// Behavioural knobs for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOptions {
    pub identity: FolderIdentity,
    pub debounce: Duration,
    pub controls: Controls,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            identity: FolderIdentity::Title,
            debounce: DEFAULT_DEBOUNCE,
            controls: Controls::default(),
        }
    }
}

/// Presentation state of one sidebar tree.
#[derive(Debug)]
pub struct TreeNavController<S> {
    tree: NavTree,
    store: S,
    expand_state: ExpandState,
    options: NavOptions,
    reconciler: StateReconciler,
    engine: SearchEngine,
    debouncer: Debouncer<String>,

    /// Raw value of the search input.
    query: String,

    /// Normalized query of the last search that ran.
    applied_query: String,

    sidebar: SidebarState,
}

impl<S: StateStore> TreeNavController<S> {
    /// Creates a controller. Call [`initialize`](Self::initialize) once the
    /// tree is in place to apply persisted state.
    pub fn new(tree: NavTree, store: S, options: NavOptions) -> Self {
        let reconciler = StateReconciler::new(options.identity);
        Self {
            tree,
            store,
            expand_state: ExpandState::new(),
            options,
            reconciler,
            engine: SearchEngine::new(reconciler),
            debouncer: Debouncer::new(options.debounce),
            query: String::new(),
            applied_query: String::new(),
            sidebar: SidebarState::Closed,
        }
    }

    /// Page-load step: loads the persisted mapping and reconciles the tree.
    pub fn initialize(&mut self) -> ReconcileSummary {
        let _span = tracing::debug_span!("initialize_nav", nodes = self.tree.len()).entered();
        self.expand_state = self.store.load();
        self.reconciler.apply(&mut self.tree, &self.expand_state)
    }

    /// Folder header click: flips the folder and persists the whole tree.
    ///
    /// Returns `false` (and changes nothing) if `id` is not a folder.
    pub fn toggle_folder(&mut self, id: NodeId) -> bool {
        let Some(node) = self.tree.node_mut(id).filter(|n| n.is_folder()) else {
            tracing::debug!(node = id.0, "toggle ignored for non-folder");
            return false;
        };
        node.expanded = !node.expanded;

        tracing::debug!(folder = %node.title, expanded = node.expanded, "folder toggled");

        self.expand_state = capture(&self.tree, self.options.identity);
        self.store.save(&self.expand_state);
        true
    }

    /// Search input change: schedules a debounced search with the new value.
    ///
    /// Returns `false` if the page has no search input.
    pub fn input(&mut self, raw: impl Into<String>, now: Instant) -> bool {
        if !self.options.controls.search_input {
            return false;
        }
        self.query = raw.into();
        self.debouncer.schedule(normalize_query(&self.query), now);
        tracing::trace!(query = %self.query, "search scheduled");
        true
    }

    /// Event-loop tick: runs the pending search once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<SearchOutcome> {
        let query = self.debouncer.poll(now)?;
        Some(self.run_search(query))
    }

    /// Escape key: clears the input and restores the tree synchronously.
    pub fn escape(&mut self) -> Option<SearchOutcome> {
        if !self.options.controls.search_input {
            return None;
        }
        self.query.clear();
        self.debouncer.cancel();
        Some(self.run_search(String::new()))
    }

    /// Explicit clear control. Same effect as [`escape`](Self::escape).
    pub fn clear_search(&mut self) -> Option<SearchOutcome> {
        self.escape()
    }

    fn run_search(&mut self, query: String) -> SearchOutcome {
        let outcome = self.engine.run(&mut self.tree, &query, &self.expand_state);
        self.applied_query = query;
        outcome
    }

    /// Sidebar toggle click. Returns `false` if the page has no toggle.
    pub fn toggle_sidebar(&mut self) -> bool {
        if !self.options.controls.sidebar_toggle {
            return false;
        }
        self.sidebar = self.sidebar.toggled();
        true
    }

    /// Document click. Returns whether the sidebar state changed.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        let next = self.sidebar.after_click(target);
        let changed = next != self.sidebar;
        self.sidebar = next;
        changed
    }

    #[must_use]
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The mapping the reconciler restores from.
    #[must_use]
    pub fn expand_state(&self) -> &ExpandState {
        &self.expand_state
    }

    #[must_use]
    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    /// Raw value of the search input.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Normalized query currently applied to the tree.
    #[must_use]
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    /// Deadline of the pending debounced search, if any.
    #[must_use]
    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    #[must_use]
    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    /// Computes a flat, render-ready view of the tree.
    ///
    /// Rows come in document order. `shown` is true when the row is visible
    /// and every ancestor is visible and expanded.
    #[must_use]
    pub fn compute_viewmodel(&self) -> NavViewModel {
        let rows: Vec<RowView> = self
            .tree
            .iter()
            .map(|(id, node)| {
                let ancestors = self.tree.ancestors_of(id);
                let shown = node.visible
                    && ancestors.iter().all(|a| {
                        self.tree.node(*a).is_some_and(|f| f.visible && f.expanded)
                    });
                let highlight = if node.search_match {
                    match_range(&node.title, &self.applied_query)
                } else {
                    None
                };

                RowView {
                    id,
                    depth: ancestors.len(),
                    kind: node.kind,
                    title: node.title.clone(),
                    expanded: node.expanded,
                    visible: node.visible,
                    shown,
                    active: node.is_active,
                    search_match: node.search_match,
                    highlight,
                }
            })
            .collect();

        let match_count = rows.iter().filter(|r| r.search_match).count();

        NavViewModel {
            rows,
            query: self.query.clone(),
            searching: !self.applied_query.is_empty(),
            match_count,
            sidebar_open: self.sidebar.is_open(),
        }
    }
}
