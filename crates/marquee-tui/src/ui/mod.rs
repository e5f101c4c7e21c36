//! UI components and rendering.

pub mod banner;
pub mod footer;
pub mod header;
pub mod layout;
pub mod overlays;
pub mod results;
pub mod search_input;
pub mod theme;

pub use theme::*;

use crate::state::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Render the whole screen.
pub fn render(f: &mut Frame, app: &mut AppState) {
    let banner = app.banner();

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Length(3), // Search input
    ];
    if banner.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0)); // Movie list
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    header::render(f, chunks[0], app);
    search_input::render(f, chunks[1], app);

    let mut next = 2;
    if let Some(banner) = &banner {
        banner::render(f, chunks[next], banner);
        next += 1;
    }
    results::render(f, chunks[next], app);
    footer::render(f, chunks[next + 1], app);

    if app.mode == AppMode::Help {
        overlays::render_help(f);
    }
}
