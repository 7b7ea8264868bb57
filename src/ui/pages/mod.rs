//! Per-page content builders.
//!
//! Each page produces its full document as pre-wrapped lines; the
//! dispatcher scrolls and paints them. Building the whole document
//! keeps the scroll extent exact without estimating wrap counts.

pub mod about;
pub mod contact;
pub mod home;
pub mod process;
pub mod work;

use ratatui::text::Line;

use crate::app::types::Page;
use crate::app::App;

use super::layout::LayoutContext;

pub fn page_lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    match app.page {
        Page::Home => home::lines(app, ctx),
        Page::About => about::lines(ctx),
        Page::Work => work::lines(app, ctx),
        Page::Process => process::lines(ctx),
        Page::Contact => contact::lines(app, ctx),
    }
}
