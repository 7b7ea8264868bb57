//! Footer bar: copyright line, contact shortcuts, keybind hints.

use chrono::{Datelike, Local};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::types::Page;
use crate::app::App;
use crate::content;

use super::layout::LayoutContext;
use super::theme;

pub fn copyright_line(ctx: &LayoutContext) -> Line<'static> {
    let year = Local::now().year();
    let dim = Style::default().fg(theme::COLOR_DIM);
    let mut spans = vec![Span::styled(
        format!(
            "© {year} {}. Designed and built with systematic thinking.",
            content::PROFILE.name
        ),
        dim,
    )];
    if !ctx.is_narrow() {
        spans.push(Span::styled(
            format!("  {}", content::PROFILE.email),
            Style::default().fg(theme::COLOR_ACCENT),
        ));
    }
    Line::from(spans)
}

fn hint_line(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let hints = if app.page == Page::Contact && app.contact.editing {
        "esc done · tab next field · ^s send"
    } else if ctx.is_narrow() {
        "1-4 pages · m menu · q quit"
    } else {
        "tab/enter navigate · 2 case studies · h home · ↑↓ scroll · q quit"
    };
    Line::from(Span::styled(hints, Style::default().fg(theme::COLOR_DIM)))
}

pub fn render_footer(frame: &mut Frame, app: &App, ctx: &LayoutContext, area: Rect) {
    let lines = vec![copyright_line(ctx), hint_line(app, ctx)];
    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::COLOR_BORDER)),
    );
    frame.render_widget(footer, area);
}
