//! Navigation state layer: persistence, reconciliation, search, and events.
//!
//! This module holds the logic behind the sidebar tree. It sits between the
//! host page (which feeds events and renders the result) and the domain and
//! storage layers.
//!
//! # Architecture
//!
//! ```text
//! Host Event → handle_event → TreeNavController ─┬─ StateReconciler
//!                                 │               ├─ SearchEngine
//!                                 │               └─ StatePersistence → Storage
//!                                 └──────────▶ (render?, Actions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects requested from the host
//! - [`controller`]: [`TreeNavController`], the owner of all navigation state
//! - [`debounce`]: Cancellable single-slot timer for search input
//! - [`flat`]: Legacy flat-list search with a "no results" placeholder
//! - [`handler`]: Event type and dispatcher
//! - [`persistence`]: [`StateStore`] seam and the storage-backed implementation
//! - [`reconciler`]: Persisted / active-item derived expand state
//! - [`search`]: Debounced substring search over tree items
//! - [`sidebar`]: Off-canvas sidebar open/closed state

pub mod actions;
pub mod controller;
pub mod debounce;
pub mod flat;
pub mod handler;
pub mod persistence;
pub mod reconciler;
pub mod search;
pub mod sidebar;

pub use actions::Action;
pub use controller::{Controls, NavOptions, TreeNavController};
pub use debounce::{Debouncer, TimerHandle, DEFAULT_DEBOUNCE};
pub use flat::{FlatItem, FlatListSearch, NoResultsPlaceholder};
pub use handler::{handle_event, Event};
pub use persistence::{capture, StatePersistence, StateStore, DEFAULT_STATE_KEY};
pub use reconciler::{ReconcileSummary, StateReconciler};
pub use search::{match_range, normalize_query, title_matches, SearchEngine, SearchOutcome};
pub use sidebar::{ClickTarget, SidebarState};
