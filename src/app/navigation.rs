//! Page transitions and menu handling.
//!
//! All ways of changing pages funnel through `navigate`, which owns the
//! couplings: per-page state resets on a genuine page change, the nav
//! cursor tracks the destination, and the content region returns to the
//! top on every activation, including re-selecting the current page.

use super::types::Page;
use super::App;

impl App {
    /// Switch the content region to `page`.
    pub fn navigate(&mut self, page: Page) {
        if page != self.page {
            tracing::debug!(from = self.page.id(), to = page.id(), "navigate");
            self.page = page;
            self.work.reset();
            self.contact.reset();
        }
        if let Some(index) = page.nav_index() {
            self.nav.cursor = index;
        }
        // Deliberate even when the page did not change: re-selecting the
        // current destination still snaps back to the top.
        self.scroll.ease_to_top();
        self.mark_dirty();
    }

    /// Activate a destination from the navigation bar or menu.
    ///
    /// Same as `navigate`, plus closing the overlay menu in the narrow
    /// presentation. The wide presentation has no menu to close.
    pub fn select_destination(&mut self, page: Page) {
        if self.is_narrow() {
            self.nav.close_menu();
        }
        self.navigate(page);
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
        self.mark_dirty();
    }

    pub fn close_menu(&mut self) {
        if self.nav.menu_open {
            self.nav.close_menu();
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }
}
