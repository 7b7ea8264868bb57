//! Shared rendering helpers: wrapping, rules, badges, gauges.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::theme;

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Wrap text to `width` display columns, breaking on whitespace.
/// Words wider than the column go on their own line unbroken; the
/// terminal clips them rather than us splitting mid-word.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0usize;
        for word in raw_line.split_whitespace() {
            let word_width = word.width();
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
        lines.push(current);
    }
    lines
}

/// Wrap a paragraph into styled lines.
pub fn wrapped_lines(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}

/// Horizontal rule spanning `width` columns.
pub fn section_rule(width: u16) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width as usize),
        Style::default().fg(theme::COLOR_BORDER),
    ))
}

/// Section heading in the page body.
pub fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_uppercase(),
        Style::default()
            .fg(theme::COLOR_HEADING)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Small bracketed badge, used for tags and categories.
pub fn badge(text: &str) -> Span<'static> {
    Span::styled(
        format!("[{text}]"),
        Style::default().fg(theme::COLOR_TAG),
    )
}

/// Proportional gauge: `level` out of 100, `width` columns wide.
pub fn gauge(level: u8, width: u16) -> Line<'static> {
    let width = width.max(1) as usize;
    let filled = (width * level.min(100) as usize) / 100;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(theme::COLOR_GAUGE)),
        Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(theme::COLOR_GAUGE_BG),
        ),
    ])
}
