//! Process page: the six-step method, principles, and toolbox.

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
    out.push(helpers::heading("How I Work"));
    out.push(Line::default());

    for step in content::PROCESS_STEPS {
        out.push(Line::from(vec![
            Span::styled(
                format!("{} ", step.number),
                Style::default().fg(theme::COLOR_HEADING),
            ),
            Span::styled(step.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        out.extend(helpers::wrapped_lines(step.description, width, body));
        for detail in step.details {
            out.push(Line::from(vec![Span::styled("  • ", dim), Span::styled(*detail, body)]));
        }
        out.push(Line::from(vec![
            Span::styled("deliverables: ", dim),
            Span::styled(step.deliverables, Style::default().fg(theme::COLOR_METRIC)),
        ]));
        out.push(Line::default());
    }
    out.push(helpers::section_rule(width));

    out.push(helpers::heading("Principles"));
    out.push(Line::default());
    for principle in content::PRINCIPLES {
        out.push(Line::from(Span::styled(
            principle.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        out.extend(helpers::wrapped_lines(principle.description, width, dim));
        out.push(Line::default());
    }
    out.push(helpers::section_rule(width));

    out.push(helpers::heading("Toolbox"));
    out.push(Line::default());
    out.push(Line::from(Span::styled("Design & collaboration", dim)));
    out.push(badges(content::DESIGN_TOOLS));
    out.push(Line::default());
    out.push(Line::from(Span::styled("Research methods", dim)));
    out.push(badges(content::RESEARCH_METHODS));

    out
}

fn badges(items: &[&str]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(helpers::badge(item));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_steps_and_tools_listed() {
        let text: String = lines(&LayoutContext::new(100, 30))
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
            .collect();
        for step in content::PROCESS_STEPS {
            assert!(text.contains(step.title), "missing {}", step.title);
        }
        assert!(text.contains("Figma"));
        assert!(text.contains("Usability Testing"));
    }
}
