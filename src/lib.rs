//! docnav: sidebar tree navigation state for static documentation sites.
//!
//! docnav keeps the presentation state of a documentation sidebar consistent
//! across page loads:
//! - Folder expand/collapse state persisted to a key-value slot
//! - Folders containing the current page forced open on every load
//! - Debounced, case-insensitive substring search over item titles
//! - A legacy flat-list search with a "no results" placeholder
//! - Off-canvas sidebar toggle and in-page anchor scrolling

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host page (renderer + DOM event glue)              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Navigation Layer (nav/)                            │  ← State machine
//! │  - Event handling                                   │
//! │  - Reconciliation and search                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Domain Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (domain/)     │
//! │ - Markup      │   │ - JSON file   │   │ - NavTree     │
//! │ - Highlights  │   │ - In-memory   │   │ - TreeView    │
//! │               │   │ - ExpandState │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │  ← Optional
//! │  - Data directory resolution                        │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Tree model, folder identity, errors
//! - [`storage`]: Key-value storage backends and the persisted state record
//! - [`nav`]: Persistence, reconciliation, search, debounce, controller, events
//! - [`ui`]: View models and markup rendering
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Configuration comes either from host-supplied string attributes
//! ([`Config::from_map`]) or from a TOML file ([`Config::from_toml_file`]):
//!
//! ```toml
//! storage_key = "tree-nav-state"
//! debounce_ms = 250
//! folder_identity = "title"
//! state_file = "~/.local/share/docnav/state.json"
//! trace_level = "docnav=debug"
//! no_results_message = "No matching results"
//! ```
//!
//! # Initialization Flow
//!
//! 1. Host builds the [`NavTree`] from the renderer's static tree
//! 2. [`initialize`] opens the state file (falling back to in-memory storage),
//!    loads the persisted mapping, and reconciles the tree
//! 3. Host feeds DOM events through [`handle_event`], re-renders when asked,
//!    and performs the returned [`Action`]s
//!
//! # Examples
//!
//! ```rust,no_run
//! use docnav::{handle_event, initialize, Config, Event, NavTree, NodeSpec};
//! use docnav::ui::render_tree;
//! use std::time::Instant;
//!
//! let tree = NavTree::from_specs(vec![NodeSpec::folder(
//!     "Guides",
//!     vec![NodeSpec::item("Install"), NodeSpec::item("Quickstart").active()],
//! )])?;
//!
//! let mut nav = initialize(&Config::default(), tree);
//! let (render, _actions) = handle_event(&mut nav, &Event::SearchInput("quick".into()), Instant::now());
//! if render {
//!     println!("{}", render_tree(&nav.compute_viewmodel()));
//! }
//! # Ok::<(), docnav::DocnavError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod nav;
pub mod observability;
pub mod storage;
pub mod ui;

pub use domain::{DocnavError, FolderIdentity, NavTree, NodeId, NodeSpec, Result, TreeView};
pub use nav::{
    handle_event, Action, ClickTarget, Event, FlatListSearch, NavOptions, SearchEngine,
    StatePersistence, StateReconciler, StateStore, TreeNavController,
};

use crate::nav::flat::DEFAULT_NO_RESULTS_MESSAGE;
use crate::storage::{JsonFileStorage, MemoryStorage, Storage};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Controller type produced by [`initialize`].
pub type SidebarNav = TreeNavController<StatePersistence<Box<dyn Storage>>>;

/// Library configuration.
///
/// Every field has a default, so an empty map or TOML document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Storage slot holding the serialized expand state.
    ///
    /// Default: `"tree-nav-state"`
    pub storage_key: String,

    /// Quiet period before a search runs, in milliseconds. Default: 250
    pub debounce_ms: u64,

    /// How folders are keyed in persisted state. Default: `title`
    pub folder_identity: FolderIdentity,

    /// JSON file backing the storage slot.
    ///
    /// A leading `~` is expanded. Default: `<data_dir>/state.json`, see
    /// [`infrastructure::get_data_dir`].
    pub state_file: Option<PathBuf>,

    /// Tracing filter, e.g. `"debug"` or `"docnav=trace"`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Text of the legacy list's "no results" placeholder.
    pub no_results_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: nav::DEFAULT_STATE_KEY.to_string(),
            debounce_ms: 250,
            folder_identity: FolderIdentity::Title,
            state_file: None,
            trace_level: None,
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from host-supplied string attributes.
    ///
    /// # Parsing Rules
    ///
    /// - `storage_key`, `no_results_message`: used when non-empty
    /// - `debounce_ms`: String → `u64` (falls back to 250 on parse error)
    /// - `folder_identity`: `title` or `path` (falls back to `title`)
    /// - `state_file`, `trace_level`: String → `Option`
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use docnav::{Config, FolderIdentity};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "100".to_string());
    /// map.insert("folder_identity".to_string(), "path".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 100);
    /// assert_eq!(config.folder_identity, FolderIdentity::Path);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let debounce_ms = map
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        let folder_identity = map
            .get("folder_identity")
            .and_then(|s| FolderIdentity::parse(s))
            .unwrap_or_default();

        Self {
            storage_key: non_empty("storage_key").unwrap_or(defaults.storage_key),
            debounce_ms,
            folder_identity,
            state_file: non_empty("state_file").map(PathBuf::from),
            trace_level: non_empty("trace_level"),
            no_results_message: non_empty("no_results_message")
                .unwrap_or(defaults.no_results_message),
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`DocnavError::Config`] on malformed TOML, wrongly typed
    /// values, or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| DocnavError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DocnavError::Io`] if the file cannot be read and
    /// [`DocnavError::Config`] if it does not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "reading config file");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Controller options derived from this configuration.
    #[must_use]
    pub fn nav_options(&self) -> NavOptions {
        NavOptions {
            identity: self.folder_identity,
            debounce: Duration::from_millis(self.debounce_ms),
            ..NavOptions::default()
        }
    }

    /// Resolved path of the state file.
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.state_file.as_ref().map_or_else(infrastructure::default_state_file, |p| {
            PathBuf::from(infrastructure::expand_tilde(&p.to_string_lossy()))
        })
    }

    /// Builds a legacy flat-list search using the configured placeholder text.
    pub fn flat_list<I, T>(&self, titles: I) -> FlatListSearch
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        FlatListSearch::new(titles).with_message(self.no_results_message.clone())
    }
}

/// Opens storage, loads persisted state, and reconciles `tree`.
///
/// Storage is the JSON file at [`Config::state_path`]. A corrupt file loads as
/// empty and is overwritten on the next save. If the file cannot be opened at
/// all (unreadable, directory not creatable, newer format) the controller
/// runs on in-memory storage instead: the page still works, state just does
/// not survive reloads.
///
/// Tracing is not installed here; call
/// [`observability::init_tracing`] first if spans should be exported.
pub fn initialize(config: &Config, tree: NavTree) -> SidebarNav {
    let path = config.state_path();
    let _span = tracing::debug_span!("initialize", path = ?path).entered();

    let storage: Box<dyn Storage> = match JsonFileStorage::new(&path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "state file unavailable, using in-memory storage");
            Box::new(MemoryStorage::new())
        }
    };

    let store = StatePersistence::with_key(storage, config.storage_key.clone());
    let mut nav = TreeNavController::new(tree, store, config.nav_options());
    let summary = nav.initialize();
    tracing::debug!(?summary, "navigation initialized");
    nav
}
