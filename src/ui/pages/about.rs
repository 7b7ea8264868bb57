//! About page: story, experience timeline, skills, philosophy.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content;
use crate::ui::helpers;
use crate::ui::layout::LayoutContext;
use crate::ui::theme;

pub fn lines(ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = ctx.content_width();
    let body = Style::default();
    let dim = Style::default().fg(theme::COLOR_DIM);

    let mut out = Vec::new();

    out.push(Line::default());
    out.push(helpers::heading("My Story"));
    out.push(Line::default());
    for paragraph in content::STORY {
        out.extend(helpers::wrapped_lines(paragraph, width, body));
        out.push(Line::default());
    }
    out.push(helpers::section_rule(width));

    out.push(helpers::heading("Experience"));
    out.push(Line::default());
    for job in content::EXPERIENCE {
        out.push(Line::from(vec![
            Span::styled(job.role, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(job.company, Style::default().fg(theme::COLOR_HEADING)),
        ]));
        out.push(Line::from(Span::styled(job.period, dim)));
        out.extend(helpers::wrapped_lines(job.description, width, body));
        for achievement in job.achievements {
            out.push(Line::from(vec![
                Span::styled("  • ", dim),
                Span::styled(*achievement, Style::default().fg(theme::COLOR_METRIC)),
            ]));
        }
        out.push(Line::default());
    }
    out.push(helpers::section_rule(width));

    out.push(helpers::heading("Core Skills"));
    out.push(Line::default());
    if ctx.should_stack() {
        for skill in content::CORE_SKILLS {
            out.push(Line::from(helpers::badge(skill)));
        }
    } else {
        for pair in content::CORE_SKILLS.chunks(2) {
            let mut spans = Vec::new();
            for (i, skill) in pair.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(helpers::badge(skill));
            }
            out.push(Line::from(spans));
        }
    }
    out.push(Line::default());
    out.push(helpers::section_rule(width));

    out.push(helpers::heading("Philosophy"));
    out.push(Line::default());
    for item in content::PHILOSOPHY {
        out.push(Line::from(Span::styled(
            item.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        out.extend(helpers::wrapped_lines(item.description, width, dim));
        out.push(Line::default());
    }

    out
}
