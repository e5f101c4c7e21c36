//! Main application loop and event handling.

use crate::state::{AppMode, AppState, FocusTarget};
use crate::ui;
use crate::worker::{start_worker, WorkerCommand, WorkerEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use marquee_core::{Config, NominationStore, SearchController};
use marquee_omdb::OmdbClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

/// Longest the loop sleeps waiting for input.
const TICK: Duration = Duration::from_millis(100);

/// Run the TUI application
pub fn run(config: Config) -> Result<()> {
    let client = OmdbClient::new(&config.omdb).context("Cannot search OMDb")?;
    let nominations = NominationStore::open_file(&config.storage_path).with_context(|| {
        format!(
            "Failed to open nominations at {}",
            config.storage_path.display()
        )
    })?;

    let mut app = AppState::new(
        SearchController::new(config.search.debounce()),
        nominations,
    );

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (evt_tx, evt_rx) = mpsc::channel();
    // Never joined: an in-flight request may block until the client timeout.
    let _worker = start_worker(Box::new(client), cmd_rx, evt_tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app, &cmd_tx, &evt_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let _ = cmd_tx.send(WorkerCommand::Quit);

    res
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cmd_tx: &Sender<WorkerCommand>,
    evt_rx: &Receiver<WorkerEvent>,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| ui::render(f, app))?;

        // Dispatch a search once the query has settled
        let now = Instant::now();
        if let Some(request) = app.tick(now) {
            if cmd_tx.send(WorkerCommand::Search(request)).is_err() {
                app.status = Some("Search worker stopped".to_string());
            }
        }

        // Apply finished searches
        while let Ok(evt) = evt_rx.try_recv() {
            match evt {
                WorkerEvent::SearchResults { id, outcome } => {
                    app.apply_search_result(id, outcome)
                }
            }
        }

        // Wake up in time for a pending debounce deadline
        let timeout = app
            .search
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(TICK))
            .unwrap_or(TICK);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key.code, key.modifiers, Instant::now());
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard events
fn handle_key_event(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
    match app.mode {
        AppMode::Search => handle_search_keys(app, key, modifiers, now),
        AppMode::Help => handle_help_keys(app, key),
    }
}

/// Handle keys in search mode
fn handle_search_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
    // Global keys that work regardless of focus
    match (key, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            app.toggle_nominated_only();
            return;
        }
        (KeyCode::Char('?'), _) if !app.is_input_focused() => {
            app.toggle_help();
            return;
        }
        (KeyCode::Tab, _) => {
            app.toggle_focus();
            return;
        }
        (KeyCode::Esc, _) => {
            if app.is_results_focused() {
                app.focus = FocusTarget::Input;
            } else {
                app.clear_query(now);
            }
            return;
        }
        _ => {}
    }

    if app.is_input_focused() {
        handle_input_keys(app, key, modifiers, now);
    } else {
        handle_results_keys(app, key, modifiers);
    }
}

/// Handle keys when input is focused
fn handle_input_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
    match (key, modifiers) {
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            app.insert_char(c, now);
        }
        (KeyCode::Backspace, _) => app.delete_char(now),
        (KeyCode::Left, _) => app.move_cursor_left(),
        (KeyCode::Right, _) => app.move_cursor_right(),
        (KeyCode::Down, _) | (KeyCode::Enter, _) => {
            if !app.visible_movies().is_empty() {
                app.focus = FocusTarget::Results;
            }
        }
        _ => {}
    }
}

/// Handle keys when the movie list is focused
fn handle_results_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    match (key, modifiers) {
        // Up arrow at top goes back to input
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE)
            if app.selected_index == 0 =>
        {
            app.focus = FocusTarget::Input;
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => app.select_next(),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => app.select_previous(),
        (KeyCode::Char('g'), KeyModifiers::NONE) => app.select_first(),
        (KeyCode::Char('G'), _) => app.select_last(),
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.toggle_selected_nomination(),
        (KeyCode::Char('q'), KeyModifiers::NONE) => app.quit(),
        _ => {}
    }
}

/// Handle keys in help mode
fn handle_help_keys(app: &mut AppState, key: KeyCode) {
    if matches!(key, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
        app.toggle_help();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::search::DEFAULT_DEBOUNCE;
    use marquee_core::{MemoryStore, Movie};

    fn state() -> AppState {
        let nominations = NominationStore::open(Box::new(MemoryStore::new())).unwrap();
        AppState::new(SearchController::default(), nominations)
    }

    fn press(app: &mut AppState, key: KeyCode, now: Instant) {
        handle_key_event(app, key, KeyModifiers::NONE, now);
    }

    fn type_str(app: &mut AppState, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn typing_schedules_one_search() {
        let mut app = state();
        let now = Instant::now();
        type_str(&mut app, "heat", now);

        assert_eq!(app.search.query, "heat");
        assert_eq!(app.tick(now), None);
        let request = app.tick(now + DEFAULT_DEBOUNCE).unwrap();
        assert_eq!(request.query, "heat");
    }

    #[test]
    fn enter_on_result_nominates_it() {
        let mut app = state();
        let now = Instant::now();
        type_str(&mut app, "up", now);
        let request = app.tick(now + DEFAULT_DEBOUNCE).unwrap();
        let up = Movie::new("Up", "2009", "N/A");
        app.apply_search_result(request.id, Ok(vec![up.clone()]));

        press(&mut app, KeyCode::Down, now);
        assert!(app.is_results_focused());
        press(&mut app, KeyCode::Enter, now);
        assert!(app.nominations.contains(&up));

        // Up at the top returns to the input.
        press(&mut app, KeyCode::Up, now);
        assert!(app.is_input_focused());
    }

    #[test]
    fn ctrl_t_toggles_nominated_only() {
        let mut app = state();
        app.nominations.add(Movie::new("Jaws", "1975", "N/A")).unwrap();
        handle_key_event(
            &mut app,
            KeyCode::Char('t'),
            KeyModifiers::CONTROL,
            Instant::now(),
        );
        assert!(app.search.show_nominated_only);
        assert_eq!(app.visible_movies().len(), 1);
    }

    #[test]
    fn question_mark_types_in_input_but_opens_help_in_list() {
        let mut app = state();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('?'), now);
        assert_eq!(app.search.query, "?");
        assert_eq!(app.mode, AppMode::Search);

        press(&mut app, KeyCode::Tab, now);
        press(&mut app, KeyCode::Char('?'), now);
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.mode, AppMode::Search);
    }

    #[test]
    fn esc_clears_query_and_cancels_search() {
        let mut app = state();
        let now = Instant::now();
        type_str(&mut app, "alien", now);
        press(&mut app, KeyCode::Esc, now);

        assert!(app.search.query.is_empty());
        assert_eq!(app.tick(now + DEFAULT_DEBOUNCE), None);
    }
}
