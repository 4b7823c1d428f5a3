//! Collapsible sidebar state.
//!
//! On narrow screens the sidebar is off-canvas. The toggle control opens and
//! closes it, and a click anywhere outside both the sidebar and the toggle
//! closes an open sidebar.

/// Whether the off-canvas sidebar is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

/// Where a document click landed, relative to the sidebar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    InsideSidebar,
    SidebarToggle,
    Outside,
}

impl SidebarState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// State after a document click. Only an outside click changes anything.
    #[must_use]
    pub const fn after_click(self, target: ClickTarget) -> Self {
        match (self, target) {
            (Self::Open, ClickTarget::Outside) => Self::Closed,
            (state, _) => state,
        }
    }
}
