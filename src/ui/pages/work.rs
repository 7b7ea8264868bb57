//! Work page: browsable case study list with expandable detail.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::content;
use crate::ui::helpers;
use crate::ui::layout::LayoutContext;
use crate::ui::theme;

fn project_lines(
    app: &App,
    ctx: &LayoutContext,
    index: usize,
    project: &'static content::Project,
) -> Vec<Line<'static>> {
    let width = ctx.content_width();
    let body = Style::default();
    let dim = Style::default().fg(theme::COLOR_DIM);
    let selected = app.work.cursor == index;
    let expanded = app.work.is_expanded(index);

    let mut out = Vec::new();

    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(theme::COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    out.push(Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(theme::COLOR_ACCENT)),
        Span::styled(project.title, title_style),
        Span::raw("  "),
        Span::styled(project.subtitle, dim),
    ]));

    let mut tag_spans = vec![Span::raw("  ")];
    for (i, tag) in project.tags.iter().enumerate() {
        if i > 0 {
            tag_spans.push(Span::raw(" "));
        }
        tag_spans.push(helpers::badge(tag));
    }
    out.push(Line::from(tag_spans));
    out.extend(helpers::wrapped_lines(project.overview, width, body));

    if expanded {
        out.push(Line::default());
        out.push(Line::from(Span::styled("Challenge", Style::default().fg(theme::COLOR_HEADING))));
        out.extend(helpers::wrapped_lines(project.challenge, width, body));
        out.push(Line::from(Span::styled("Solution", Style::default().fg(theme::COLOR_HEADING))));
        out.extend(helpers::wrapped_lines(project.solution, width, body));
        out.push(Line::default());

        let mut impact_spans = Vec::new();
        for (i, (label, value)) in project.impact.iter().enumerate() {
            if i > 0 {
                impact_spans.push(Span::raw("   "));
            }
            impact_spans.push(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(theme::COLOR_METRIC)
                    .add_modifier(Modifier::BOLD),
            ));
            impact_spans.push(Span::styled(format!(" {label}"), dim));
        }
        out.push(Line::from(impact_spans));
        out.push(Line::default());

        for detail in project.details {
            out.push(Line::from(vec![Span::styled("  • ", dim), Span::styled(*detail, body)]));
        }
        out.push(Line::default());
        out.push(Line::from(vec![
            Span::styled("timeline ", dim),
            Span::styled(project.timeline, body),
            Span::raw("   "),
            Span::styled("team ", dim),
            Span::styled(project.team, body),
        ]));
        if selected {
            out.push(Line::from(Span::styled("v collapse", dim)));
        }
    } else if selected {
        out.push(Line::from(Span::styled("v view case study", dim)));
    }

    out.push(Line::default());
    out
}

pub fn lines(app: &App, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = ctx.content_width();
    let dim = Style::default().fg(theme::COLOR_DIM);

    let mut out = Vec::new();
    out.push(Line::default());
    out.push(helpers::heading("Case Studies"));
    out.push(Line::from(Span::styled("n/p select · v expand", dim)));
    out.push(Line::default());

    for (index, project) in content::PROJECTS.iter().enumerate() {
        out.extend(project_lines(app, ctx, index, project));
        out.push(helpers::section_rule(width));
    }

    out.push(Line::from(vec![
        Span::styled("Interested in working together? ", Style::default()),
        Span::styled("(press 4)", dim),
    ]));
    out.push(Line::from(vec![
        Span::styled("Curious about my process? ", Style::default()),
        Span::styled("(press 3)", dim),
    ]));

    out
}
