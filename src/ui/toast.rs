//! Transient toast overlay, bottom-right of the screen.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::theme;

pub fn render_toast(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.toast.message() else {
        return;
    };

    let max_text = area.width.saturating_sub(6).max(10) as usize;
    let width = (message.width().min(max_text) + 4) as u16;
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(4),
        width: width.min(area.width),
        height: 3.min(area.height),
    };

    let style = Style::default().fg(theme::COLOR_TOAST).bg(theme::COLOR_TOAST_BG);
    let body = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(body, toast_area);
}
