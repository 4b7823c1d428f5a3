//! Legacy flat-list search.
//!
//! Sidebars rendered as a plain list (no folders) get the same match and
//! visibility rules as the tree search, without ancestor expansion or folder
//! hiding. Instead, a "no results" placeholder is shown while a non-empty
//! query matches nothing, and a clear button is shown while the query is
//! non-empty. The legacy list filters on every keystroke.

use crate::nav::actions::Action;
use crate::nav::search::{normalize_query, title_matches};

/// Element id of the placeholder node.
pub const NO_RESULTS_ID: &str = "no-search-results";

/// CSS class of the placeholder node.
pub const NO_RESULTS_CLASS: &str = "no-results";

/// Placeholder text used when none is configured.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No matching results";

/// One entry of the flat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    pub title: String,
    pub visible: bool,
    pub search_match: bool,
}

impl FlatItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            visible: true,
            search_match: false,
        }
    }
}

/// The "no results" placeholder node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResultsPlaceholder {
    pub id: &'static str,
    pub class: &'static str,
    pub message: String,
}

/// Flat list with its search input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatListSearch {
    items: Vec<FlatItem>,
    query: String,
    message: String,
    placeholder: Option<NoResultsPlaceholder>,
}

impl FlatListSearch {
    pub fn new<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: titles.into_iter().map(FlatItem::new).collect(),
            query: String::new(),
            message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            placeholder: None,
        }
    }

    /// Overrides the placeholder text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn items(&self) -> &[FlatItem] {
        &self.items
    }

    /// Raw value of the search input.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The placeholder node, present only while it is rendered.
    #[must_use]
    pub fn placeholder(&self) -> Option<&NoResultsPlaceholder> {
        self.placeholder.as_ref()
    }

    /// Whether the clear button is shown.
    #[must_use]
    pub fn clear_button_visible(&self) -> bool {
        !normalize_query(&self.query).is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|i| i.visible).count()
    }

    /// Handles a change of the input value and filters immediately.
    pub fn input(&mut self, raw: impl Into<String>) -> usize {
        self.query = raw.into();
        let query = normalize_query(&self.query);
        self.run(&query)
    }

    /// Escape key: clears the input and shows everything.
    pub fn escape(&mut self) {
        self.query.clear();
        self.run("");
    }

    /// Clear button: like [`escape`](Self::escape), then refocuses the input.
    pub fn clear(&mut self) -> Vec<Action> {
        self.escape();
        vec![Action::FocusSearchInput]
    }

    /// Applies a normalized query and returns the number of visible items.
    pub fn run(&mut self, query: &str) -> usize {
        let _span = tracing::debug_span!("flat_search", query_len = query.len()).entered();

        for item in &mut self.items {
            let matched = query.is_empty() || title_matches(&item.title, query);
            item.visible = matched;
            item.search_match = matched && !query.is_empty();
        }

        let visible = self.visible_count();
        if !query.is_empty() && visible == 0 {
            if self.placeholder.is_none() {
                tracing::debug!("showing no-results placeholder");
            }
            self.placeholder = Some(NoResultsPlaceholder {
                id: NO_RESULTS_ID,
                class: NO_RESULTS_CLASS,
                message: self.message.clone(),
            });
        } else {
            self.placeholder = None;
        }

        tracing::debug!(visible, total = self.items.len(), "flat search applied");
        visible
    }
}
