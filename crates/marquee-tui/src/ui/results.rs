//! Movie list rendering.

use crate::state::AppState;
use crate::ui;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NOMINATED_TAG: &str = "★ nominated";
const NOMINATE_TAG: &str = "☆ nominate";

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let border_style = if app.is_results_focused() {
        Style::default().fg(ui::BORDER_FOCUS)
    } else {
        Style::default().fg(ui::BORDER_DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(app.list_title());

    if app.visible_movies().is_empty() {
        let text = app.placeholder().unwrap_or_default();
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(ui::TEXT_SECONDARY))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    // Update scrolling state.
    let viewport_height = area.height.saturating_sub(2) as usize; // borders
    app.ui.viewport_height = viewport_height.max(1);
    app.ui.update_scroll(app.selected_index);

    let movies = app.visible_movies();
    let selected = app.selected_index;
    let start = app.ui.scroll_offset.min(movies.len());
    let end = (start + viewport_height).min(movies.len());

    // Marker, spaces, year, and tag share the row with the title.
    let available_width = area.width.saturating_sub(4) as usize;
    let max_title_width = available_width.saturating_sub(24).max(10);
    let limit_reached = app.nominations.is_full();

    let items: Vec<ListItem> = movies[start..end]
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let is_selected = start + i == selected;
            let marker = if is_selected { "▸" } else { " " };
            let nominated = app.nominations.contains(movie);

            let (tag, tag_style) = if nominated {
                (NOMINATED_TAG, Style::default().fg(ui::ACCENT))
            } else if limit_reached {
                ("", Style::default())
            } else {
                (NOMINATE_TAG, Style::default().fg(ui::TEXT_MUTED))
            };

            let mut title_style = Style::default().fg(ui::TEXT_PRIMARY);
            if nominated {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(ui::PRIMARY)),
                Span::raw(" "),
                Span::styled(truncate_to_width(&movie.title, max_title_width), title_style),
                Span::raw(" "),
                Span::styled(
                    format!("({})", movie.year),
                    Style::default().fg(ui::TEXT_SECONDARY),
                ),
                Span::raw("  "),
                Span::styled(tag, tag_style),
            ];
            if !movie.has_poster() {
                spans.push(Span::styled(
                    "  no poster",
                    Style::default()
                        .fg(ui::TEXT_MUTED)
                        .add_modifier(Modifier::DIM),
                ));
            }

            let style = if is_selected {
                Style::default().bg(ui::BG_ELEVATED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when
/// shortened.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
