//! Header rendering.

use crate::state::AppState;
use crate::ui;
use marquee_core::build_info::BUILD_INFO;
use marquee_core::search::SearchPhase;
use marquee_core::NOMINATION_LIMIT;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let count = app.nominations.len();
    let view = if app.search.show_nominated_only {
        "view: nominated only"
    } else {
        "view: search results"
    };

    let sep = Span::styled(" | ", Style::default().fg(ui::TEXT_MUTED));
    let nomination_color = ui::nomination_color(count, NOMINATION_LIMIT);

    let mut spans = vec![
        Span::styled(
            "marquee",
            Style::default()
                .fg(ui::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled("★ ", Style::default().fg(nomination_color)),
        Span::styled(
            format!("nominations {count}/{NOMINATION_LIMIT}"),
            Style::default().fg(nomination_color),
        ),
        sep.clone(),
        Span::styled(view, Style::default().fg(ui::TEXT_SECONDARY)),
    ];

    if app.search.phase() == SearchPhase::Searching {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            "searching…",
            Style::default()
                .fg(ui::PRIMARY_DIM)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let build_info = BUILD_INFO.compact();
    let build_width = (build_info.len() as u16).min(area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui::BORDER_DIM))
        .style(Style::default().bg(ui::BG_SURFACE));
    let inner = block.inner(area);

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(build_width)])
        .split(inner);

    let left = Paragraph::new(Line::from(spans)).style(Style::default().bg(ui::BG_SURFACE));
    let right = Paragraph::new(build_info)
        .style(
            Style::default()
                .fg(ui::TEXT_MUTED)
                .bg(ui::BG_SURFACE)
                .add_modifier(Modifier::DIM),
        )
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}
