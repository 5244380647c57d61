//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of auth and page data so layout controls
//! can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the layout shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    /// Number of courses in the cart, shown as a sidebar badge.
    pub cart_count: usize,
}
