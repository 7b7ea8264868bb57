//! Landing page: hero, skills, process preview, featured work.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::content;
use crate::ui::helpers;
use crate::ui::layout::LayoutContext;
use crate::ui::theme;

/// Tagline with a sliding highlight window driven by the tick counter.
/// Static dim text when animations are off.
fn tagline_line(app: &App) -> Line<'static> {
    let tagline = content::PROFILE.tagline;
    if !app.scroll.is_smooth() {
        return Line::from(Span::styled(
            tagline,
            Style::default().fg(theme::COLOR_DIM),
        ));
    }

    let chars: Vec<char> = tagline.chars().collect();
    let len = chars.len();
    let window = 8usize;
    let pos = (app.tick_count / 8) as usize % len;

    let mut spans = Vec::new();
    for (i, c) in chars.iter().enumerate() {
        let lit = (i + len - pos) % len < window;
        let style = if lit {
            Style::default().fg(theme::COLOR_ACCENT)
        } else {
            Style::default().fg(theme::COLOR_DIM)
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    Line::from(spans)
}

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = ctx.content_width();
    let body = Style::default();
    let dim = Style::default().fg(theme::COLOR_DIM);

    let mut out = Vec::new();

    // Hero
    out.push(Line::default());
    out.push(Line::from(Span::styled(
        content::PROFILE.name.to_uppercase(),
        Style::default()
            .fg(theme::COLOR_BRAND)
            .add_modifier(Modifier::BOLD),
    )));
    out.push(Line::from(Span::styled(content::PROFILE.role, body)));
    out.push(tagline_line(app));
    out.push(Line::default());
    out.push(Line::from(vec![
        Span::styled("Case Studies ", Style::default().fg(theme::COLOR_ACCENT)),
        Span::styled("(press 2)", dim),
        Span::raw("   "),
        Span::styled("Get in Touch ", Style::default().fg(theme::COLOR_ACCENT)),
        Span::styled("(press 4)", dim),
    ]));
    out.push(Line::default());
    out.push(helpers::section_rule(width));

    // Skills
    out.push(helpers::heading("Skills"));
    out.push(Line::default());
    let gauge_width = width.saturating_sub(24).clamp(10, 40);
    for skill in content::SKILLS {
        if ctx.should_stack() {
            out.push(Line::from(Span::styled(skill.name, body)));
            out.push(helpers::gauge(skill.level, gauge_width));
        } else {
            let mut line = helpers::gauge(skill.level, gauge_width);
            line.spans.insert(0, Span::styled(format!("{:<20} ", skill.name), body));
            line.spans.push(Span::styled(format!(" {}%", skill.level), dim));
            out.push(line);
        }
    }
    out.push(Line::default());
    out.push(helpers::section_rule(width));

    // Process preview
    out.push(helpers::heading("How I Work"));
    out.push(Line::default());
    for step in content::LANDING_STEPS {
        out.push(Line::from(vec![
            Span::styled(format!("{} ", step.step), Style::default().fg(theme::COLOR_HEADING)),
            Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        out.extend(helpers::wrapped_lines(step.description, width, dim));
    }
    out.push(Line::default());
    out.push(helpers::section_rule(width));

    // Featured work
    out.push(helpers::heading("Featured Work"));
    out.push(Line::default());
    for project in content::FEATURED {
        out.push(Line::from(vec![
            Span::styled(project.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            helpers::badge(project.kind),
        ]));
        out.push(Line::from(Span::styled(
            project.metric,
            Style::default().fg(theme::COLOR_METRIC),
        )));
        out.extend(helpers::wrapped_lines(project.description, width, dim));
        out.push(Line::default());
    }

    out
}
