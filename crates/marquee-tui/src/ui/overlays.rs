//! Overlay rendering (help).

use crate::ui;
use ratatui::{
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const HELP_TITLE: &str = "marquee: search movies, nominate your top five";

pub fn render_help(f: &mut Frame) {
    let help_text = [
        HELP_TITLE,
        "",
        "Search:",
        "  Type          Edit the query (searches after a short pause)",
        "  ← / →         Move cursor",
        "  ↓ / Enter     Move to the movie list",
        "  Esc           Clear the query",
        "",
        "Movie list:",
        "  j / ↓         Down",
        "  k / ↑         Up (at top: back to search)",
        "  g / G         Top / Bottom",
        "  Enter / Space Nominate or withdraw the selected movie",
        "  Esc           Back to search",
        "",
        "Anywhere:",
        "  Tab           Switch focus",
        "  Ctrl+T        Show nominated movies only",
        "  Ctrl+C        Quit",
        "",
        "Press Esc to close",
    ];

    let help = Paragraph::new(help_text.join("\n"))
        .style(Style::default().fg(ui::TEXT_PRIMARY).bg(ui::BG_DARK))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ui::PRIMARY))
                .title(" Help ")
                .style(Style::default().bg(ui::BG_DARK)),
        );

    let area = ui::layout::centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
