//! Side effects requested from the host page.
//!
//! The event handler mutates navigation state directly; anything it cannot
//! do itself (scrolling, moving focus) comes back as an [`Action`] for the
//! host to carry out after re-rendering.

/// Commands the host executes after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Smoothly scrolls the element with this id into view, aligned to the
    /// start of the viewport.
    ScrollIntoView {
        /// Element id, without the leading `#`.
        target: String,
    },

    /// Moves keyboard focus back to the search input.
    FocusSearchInput,
}
