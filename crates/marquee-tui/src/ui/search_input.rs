//! Search input rendering.

use crate::state::AppState;
use crate::ui;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "Search: ";
const PLACEHOLDER: &str = "Enter your favourite movie name...";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let query = &app.search.query;
    let is_focused = app.is_input_focused();

    let border_style = if is_focused {
        Style::default().fg(ui::BORDER_FOCUS)
    } else {
        Style::default().fg(ui::BORDER_DIM)
    };

    let text = if query.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(ui::TEXT_MUTED))
    } else {
        Span::styled(query.as_str(), Style::default().fg(ui::TEXT_PRIMARY))
    };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(ui::PRIMARY)),
        text,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(if is_focused {
                Style::default().bg(ui::BG_ELEVATED)
            } else {
                Style::default().bg(ui::BG_SURFACE)
            }),
    );

    f.render_widget(input, area);

    if is_focused {
        // Cursor position: 1 (border) + prompt + display width before the cursor
        let before: String = query.chars().take(app.cursor_position).collect();
        let cursor_x = area.x + 1 + PROMPT.len() as u16 + before.width() as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
