//! Contact page: inquiry form, direct channels, FAQ.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::content;
use crate::state::Field;
use crate::ui::helpers;
use crate::ui::layout::LayoutContext;
use crate::ui::theme;

fn field_lines(app: &App, ctx: &LayoutContext, field: Field) -> Vec<Line<'static>> {
    let width = ctx.content_width();
    let focused = app.contact.focused == field;
    let dim = Style::default().fg(theme::COLOR_DIM);

    let required = matches!(field, Field::Name | Field::Email | Field::Message);
    let label_style = if focused && app.contact.editing {
        Style::default()
            .fg(theme::COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        dim
    };

    let mut out = Vec::new();
    let marker = if focused { "▶ " } else { "  " };
    out.push(Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(theme::COLOR_ACCENT)),
        Span::styled(field.label(), label_style),
        Span::styled(if required { " *" } else { "" }, dim),
    ]));

    let mut value = app.contact.value(field).to_string();
    if focused && app.contact.editing {
        value.push('▌');
    }
    if value.is_empty() {
        out.push(Line::from(Span::styled("    —", dim)));
    } else {
        for line in helpers::wrap_text(&value, width.saturating_sub(4)) {
            out.push(Line::from(Span::raw(format!("    {line}"))));
        }
    }
    out
}

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = ctx.content_width();
    let body = Style::default();
    let dim = Style::default().fg(theme::COLOR_DIM);

    let mut out = Vec::new();
    out.push(Line::default());
    out.push(helpers::heading("Let's Work Together"));
    out.extend(helpers::wrapped_lines(content::RESPONSE_TIME, width, dim));
    out.push(Line::default());

    // Direct channels
    out.push(Line::from(vec![
        Span::styled("e ", Style::default().fg(theme::COLOR_ACCENT)),
        Span::styled(content::PROFILE.email, body),
        Span::raw("   "),
        Span::styled("l ", Style::default().fg(theme::COLOR_ACCENT)),
        Span::styled(content::PROFILE.linkedin, body),
    ]));
    out.push(Line::from(vec![
        Span::styled(content::PROFILE.location, dim),
        Span::styled(format!(" · {}", content::PROFILE.location_note), dim),
    ]));
    out.push(Line::default());
    out.push(helpers::section_rule(width));

    // Form
    out.push(helpers::heading("Send a Message"));
    let hint = if app.contact.editing {
        "esc done · tab next field · ^s send"
    } else {
        "i to start typing"
    };
    out.push(Line::from(Span::styled(hint, dim)));
    out.push(Line::default());
    for field in Field::ALL {
        out.extend(field_lines(app, ctx, field));
    }
    out.push(Line::default());
    out.push(helpers::section_rule(width));

    out.push(helpers::heading("What I'm Looking For"));
    out.push(Line::default());
    for item in content::LOOKING_FOR {
        out.push(Line::from(vec![Span::styled("  • ", dim), Span::styled(*item, body)]));
    }
    out.push(Line::default());
    out.push(helpers::section_rule(width));

    out.push(helpers::heading("FAQ"));
    out.push(Line::default());
    for faq in content::FAQS {
        out.push(Line::from(Span::styled(
            faq.question,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        out.extend(helpers::wrapped_lines(faq.answer, width, dim));
        out.push(Line::default());
    }

    out
}
