pub mod handlers;
pub mod navigation;
pub mod types;

use crate::config::Config;
use crate::state::{ContactForm, NavState, ScrollState, Toast, WorkState};

pub use types::Page;

/// Terminal width below which the navigation collapses into a menu.
pub const NARROW_WIDTH: u16 = 80;

/// Central application state.
///
/// One instance lives for the whole session. Input handlers mutate it,
/// `tick()` advances its animations, and the renderer reads it. Page
/// identity, menu state, scroll position, and per-page state are all
/// independent fields so one changing never implicitly rewrites
/// another; the navigation methods encode the couplings that do exist.
pub struct App {
    /// Which page the content region shows.
    pub page: Page,
    /// Menu visibility and keyboard cursor over the nav destinations.
    pub nav: NavState,
    /// Vertical scroll of the content region.
    pub scroll: ScrollState,
    /// Transient confirmation overlay.
    pub toast: Toast,
    /// Case-study browsing state (Work page).
    pub work: WorkState,
    /// Inquiry form state (Contact page).
    pub contact: ContactForm,

    pub should_quit: bool,
    pub tick_count: u64,
    pub needs_redraw: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,

    /// Lifetime of a toast, in ticks.
    pub toast_ticks: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            page: config.start_page(),
            nav: NavState::default(),
            scroll: ScrollState::new(config.smooth_scroll),
            toast: Toast::default(),
            work: WorkState::default(),
            contact: ContactForm::default(),
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            terminal_width: 0,
            terminal_height: 0,
            toast_ticks: config.toast_ticks,
        }
    }

    /// Whether the layout is in its narrow presentation.
    pub fn is_narrow(&self) -> bool {
        self.terminal_width < NARROW_WIDTH
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        if !self.is_narrow() {
            // The overlay menu only exists in the narrow presentation;
            // widening the terminal dismisses it.
            self.nav.close_menu();
        }
        self.mark_dirty();
    }

    /// Advance one animation frame. Returns nothing; sets the dirty
    /// flag only when something on screen actually changed.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.scroll.tick() {
            self.mark_dirty();
        }
        if self.toast.tick() {
            self.mark_dirty();
        }
        // The hero shimmer repaints while visible.
        if self.page == Page::Home && self.scroll.is_smooth() && self.tick_count % 8 == 0 {
            self.mark_dirty();
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        let ticks = self.toast_ticks;
        self.toast.show(message, ticks);
        self.mark_dirty();
    }
}
