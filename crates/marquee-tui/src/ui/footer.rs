//! Footer / status bar rendering.

use crate::state::AppState;
use crate::ui;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![
        Span::styled("Tab:", Style::default().fg(ui::PRIMARY)),
        Span::styled(" focus  ", Style::default().fg(ui::TEXT_SECONDARY)),
    ];

    if !app.nominations.is_empty() {
        spans.extend(vec![
            Span::styled("Ctrl+T:", Style::default().fg(ui::PRIMARY)),
            Span::styled(" nominated only  ", Style::default().fg(ui::TEXT_SECONDARY)),
        ]);
    }

    if app.is_results_focused() {
        spans.extend(vec![
            Span::styled("↵:", Style::default().fg(ui::PRIMARY)),
            Span::styled(" nominate/withdraw  ", Style::default().fg(ui::TEXT_SECONDARY)),
            Span::styled("j/k:", Style::default().fg(ui::PRIMARY)),
            Span::styled(" ↑↓  ", Style::default().fg(ui::TEXT_SECONDARY)),
            Span::styled("?:", Style::default().fg(ui::PRIMARY)),
            Span::styled(" help  ", Style::default().fg(ui::TEXT_SECONDARY)),
        ]);
    }

    spans.extend(vec![
        Span::styled("Esc:", Style::default().fg(ui::PRIMARY)),
        Span::styled(" clear  ", Style::default().fg(ui::TEXT_SECONDARY)),
        Span::styled("Ctrl-C:", Style::default().fg(ui::PRIMARY)),
        Span::styled(" quit", Style::default().fg(ui::TEXT_SECONDARY)),
    ]);

    if let Some(msg) = &app.status {
        spans.push(Span::styled("  ", Style::default()));

        let color = if app.search.has_error || msg.starts_with("Failed") {
            ui::ERROR
        } else {
            ui::SUCCESS
        };
        spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = Paragraph::new(Line::from(spans)).style(Style::default().bg(ui::BG_SURFACE));
    f.render_widget(hints, area);
}
