//! Rendering.
//!
//! One `render` entry point paints the whole frame: navigation bar on
//! top, scrollable content region, footer, and the overlay layers
//! (narrow menu, toast). Pages build their full document as wrapped
//! lines, so the scroll extent the content region reports is exact.
//!
//! All sizing decisions go through `LayoutContext`; see `layout` for
//! the breakpoints.

mod footer;
pub mod helpers;
pub mod layout;
mod nav;
mod pages;
mod theme;
mod toast;

pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_GAUGE, COLOR_GAUGE_BG,
    COLOR_HEADING, COLOR_METRIC, COLOR_TAG, COLOR_TOAST, COLOR_TOAST_BG,
};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Render the full frame from current state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if app.terminal_width != area.width || app.terminal_height != area.height {
        app.resize(area.width, area.height);
    }
    let ctx = LayoutContext::new(area.width, area.height);

    let footer_height = if ctx.is_short() { 0 } else { 3 };
    let [nav_area, content_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    nav::render_nav(frame, app, &ctx, nav_area);
    render_content(frame, app, &ctx, content_area);
    if footer_height > 0 {
        footer::render_footer(frame, app, &ctx, footer_area);
    }

    if ctx.is_narrow() && app.nav.menu_open {
        nav::render_menu_overlay(frame, app, area);
    }
    toast::render_toast(frame, app, area);

    app.needs_redraw = false;
}

fn render_content(frame: &mut Frame, app: &mut App, ctx: &LayoutContext, area: Rect) {
    let inner = Rect {
        x: area.x + 2,
        y: area.y,
        width: ctx.content_width().min(area.width.saturating_sub(2)),
        height: area.height,
    };

    let lines = pages::page_lines(app, ctx);
    let total = lines.len() as u16;
    app.scroll.set_max(total.saturating_sub(inner.height));

    let body = Paragraph::new(lines).scroll((app.scroll.line_offset(), 0));
    frame.render_widget(body, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::Page;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(width: u16, height: u16, app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_every_page_wide() {
        let mut app = App::new(&Config::default());
        for page in Page::ALL {
            app.navigate(page);
            let terminal = draw(120, 40, &mut app);
            let text = buffer_text(&terminal);
            assert!(text.contains("ALEX CHEN"), "{} lost the brand", page.id());
        }
    }

    #[test]
    fn test_render_every_page_narrow() {
        let mut app = App::new(&Config::default());
        for page in Page::ALL {
            app.navigate(page);
            let terminal = draw(60, 20, &mut app);
            let text = buffer_text(&terminal);
            assert!(text.contains("menu"), "{} lost the menu toggle", page.id());
        }
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let mut app = App::new(&Config::default());
        for page in Page::ALL {
            app.navigate(page);
            let _ = draw(10, 3, &mut app);
        }
    }

    #[test]
    fn test_wide_bar_lists_destinations() {
        let mut app = App::new(&Config::default());
        let terminal = draw(120, 40, &mut app);
        let text = buffer_text(&terminal);
        for page in Page::NAV_PAGES {
            assert!(text.contains(page.title()), "missing {}", page.title());
        }
    }

    #[test]
    fn test_narrow_menu_overlay_renders_destinations() {
        let mut app = App::new(&Config::default());
        app.resize(60, 24);
        app.toggle_menu();
        let terminal = draw(60, 24, &mut app);
        let text = buffer_text(&terminal);
        for page in Page::NAV_PAGES {
            assert!(text.contains(page.title()), "missing {}", page.title());
        }
    }

    #[test]
    fn test_toast_overlay_renders() {
        let mut app = App::new(&Config::default());
        app.show_toast("saved");
        let terminal = draw(80, 24, &mut app);
        assert!(buffer_text(&terminal).contains("saved"));
    }

    #[test]
    fn test_render_clears_dirty_flag_and_sets_extent() {
        let mut app = App::new(&Config::default());
        app.navigate(Page::Process);
        let _ = draw(100, 30, &mut app);
        assert!(!app.needs_redraw);
        assert!(app.scroll.max() > 0);
    }
}
