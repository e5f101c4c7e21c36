//! Info / danger banner rendering.

use crate::state::{Banner, BannerKind};
use crate::ui;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, banner: &Banner) {
    let color = match banner.kind {
        BannerKind::Info => ui::INFO,
        BannerKind::Danger => ui::ERROR,
    };

    let widget = Paragraph::new(banner.text)
        .style(
            Style::default()
                .fg(color)
                .bg(ui::BG_SURFACE)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    f.render_widget(widget, area);
}
