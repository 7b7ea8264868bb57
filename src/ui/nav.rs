//! Navigation bar and overlay menu.
//!
//! Wide terminals show the brand mark plus the four destinations
//! inline; narrow terminals show the brand plus a menu toggle, and the
//! destination list renders as an overlay when the menu is open. The
//! brand itself is not a destination entry, so on the home page no
//! entry is highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::types::Page;
use crate::app::App;

use super::layout::LayoutContext;
use super::theme;

fn destination_style(app: &App, page: Page) -> Style {
    if app.page == page {
        Style::default()
            .fg(theme::COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(theme::COLOR_DIM)
    }
}

fn brand_span() -> Span<'static> {
    Span::styled(
        "ALEX CHEN",
        Style::default()
            .fg(theme::COLOR_BRAND)
            .add_modifier(Modifier::BOLD),
    )
}

/// The inline bar content for the wide presentation.
pub fn nav_line(app: &App) -> Line<'static> {
    let mut spans = vec![brand_span(), Span::raw("    ")];
    for (index, page) in Page::NAV_PAGES.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        if app.nav.cursor == index {
            spans.push(Span::styled("▶ ", Style::default().fg(theme::COLOR_ACCENT)));
        } else {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(page.title().to_string(), destination_style(app, *page)));
    }
    Line::from(spans)
}

/// The collapsed bar for the narrow presentation.
pub fn collapsed_line(app: &App) -> Line<'static> {
    let toggle = if app.nav.menu_open {
        "✕ close (m)"
    } else {
        "☰ menu (m)"
    };
    Line::from(vec![
        brand_span(),
        Span::raw("  "),
        Span::styled(toggle, Style::default().fg(theme::COLOR_DIM)),
    ])
}

pub fn render_nav(frame: &mut Frame, app: &App, ctx: &LayoutContext, area: Rect) {
    let line = if ctx.is_narrow() {
        collapsed_line(app)
    } else {
        nav_line(app)
    };
    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme::COLOR_BORDER)),
    );
    frame.render_widget(bar, area);
}

/// Overlay list of destinations shown when the narrow menu is open.
pub fn render_menu_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let width = 24u16.min(area.width);
    let height = (Page::NAV_PAGES.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width,
        height,
    };

    let lines: Vec<Line> = Page::NAV_PAGES
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let marker = if app.nav.cursor == index { "▶ " } else { "  " };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(theme::COLOR_ACCENT)),
                Span::styled(page.title().to_string(), destination_style(app, *page)),
            ])
        })
        .collect();

    frame.render_widget(Clear, menu_area);
    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::COLOR_BORDER))
            .title(" menu "),
    );
    frame.render_widget(menu, menu_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app_on(page: Page) -> App {
        let mut app = App::new(&Config::default());
        app.terminal_width = 120;
        app.terminal_height = 40;
        app.navigate(page);
        app
    }

    fn active_titles(line: &Line) -> Vec<String> {
        line.spans
            .iter()
            .filter(|s| s.style.add_modifier.contains(Modifier::UNDERLINED))
            .map(|s| s.content.to_string())
            .collect()
    }

    #[test]
    fn test_home_highlights_no_destination() {
        let app = app_on(Page::Home);
        assert!(active_titles(&nav_line(&app)).is_empty());
    }

    #[test]
    fn test_exactly_one_destination_active_off_home() {
        for page in Page::NAV_PAGES {
            let app = app_on(page);
            assert_eq!(active_titles(&nav_line(&app)), vec![page.title().to_string()]);
        }
    }

    #[test]
    fn test_bar_lists_every_destination() {
        let app = app_on(Page::Home);
        let text: String = nav_line(&app)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        for page in Page::NAV_PAGES {
            assert!(text.contains(page.title()), "missing {}", page.title());
        }
        assert!(!text.contains("Home"));
    }

    #[test]
    fn test_collapsed_bar_reflects_menu_state() {
        let mut app = app_on(Page::Home);
        app.terminal_width = 60;
        let closed: String = collapsed_line(&app)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(closed.contains("menu"));
        app.toggle_menu();
        let open: String = collapsed_line(&app)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(open.contains("close"));
    }
}
