//! Navigation bar state.

use crate::app::Page;

/// Local state of the navigation bar.
///
/// `menu_open` is the collapsed-menu toggle for narrow terminals. It is
/// independent of the current page: toggling it never navigates, and
/// selecting a destination from the collapsed menu is responsible for
/// forcing it closed in the same update (a stale open menu after
/// navigating is a defect).
#[derive(Debug, Clone, Default)]
pub struct NavState {
    /// Whether the collapsed menu is expanded (narrow presentation only).
    pub menu_open: bool,
    /// Cursor into [`Page::NAV_PAGES`], moved with Tab/BackTab.
    pub cursor: usize,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the collapsed menu open/closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Force the collapsed menu closed. No-op if already closed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Move the cursor to the next destination, wrapping.
    pub fn cycle_next(&mut self) {
        self.cursor = (self.cursor + 1) % Page::NAV_PAGES.len();
    }

    /// Move the cursor to the previous destination, wrapping.
    pub fn cycle_prev(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(Page::NAV_PAGES.len() - 1);
    }

    /// The destination currently under the cursor.
    pub fn cursor_page(&self) -> Page {
        Page::NAV_PAGES[self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!NavState::new().menu_open);
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let mut nav = NavState::new();
        nav.close_menu();
        assert!(!nav.menu_open);
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        let mut nav = NavState::new();
        assert_eq!(nav.cursor_page(), Page::About);
        nav.cycle_prev();
        assert_eq!(nav.cursor_page(), Page::Contact);
        nav.cycle_next();
        assert_eq!(nav.cursor_page(), Page::About);
        for _ in 0..Page::NAV_PAGES.len() {
            nav.cycle_next();
        }
        assert_eq!(nav.cursor_page(), Page::About);
    }
}
