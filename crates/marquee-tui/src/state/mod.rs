//! Application state management.

use marquee_core::{
    AddOutcome, Movie, NominationStore, SearchController, SearchRequest, NOMINATION_LIMIT,
};
use std::time::Instant;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Main search mode
    Search,
    /// Help overlay
    Help,
}

/// Focus target in search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Search input is focused
    Input,
    /// Movie list is focused
    Results,
}

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Danger,
}

/// A message shown above the movie list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: &'static str,
}

pub const SEARCH_FAILED_TEXT: &str = "Oops! Looks like something went wrong, please try again.";
pub const LIMIT_REACHED_TEXT: &str = "Wooho! You have nominated 5 movies.";
pub const NO_RESULTS_TEXT: &str = "No movies found, try to change your search query.";
pub const WELCOME_TEXT: &str = "Welcome to marquee. Type to search for movies.";
pub const SEARCHING_TEXT: &str = "Searching…";

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Current focus
    pub focus: FocusTarget,
    /// Query, results, and loading/error flags
    pub search: SearchController,
    /// Persisted nominations
    pub nominations: NominationStore,
    /// Cursor position in the query, in characters
    pub cursor_position: usize,
    /// Selected row in the visible list
    pub selected_index: usize,
    /// UI state
    pub ui: UiState,
    /// Last status message (footer)
    pub status: Option<String>,
    /// Whether to quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state
    pub fn new(search: SearchController, nominations: NominationStore) -> Self {
        let mut state = Self {
            mode: AppMode::Search,
            focus: FocusTarget::Input,
            search,
            nominations,
            cursor_position: 0,
            selected_index: 0,
            ui: UiState::new(),
            status: None,
            should_quit: false,
        };
        state.search.sync_nominations(state.nominations.len());
        state
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Search,
            AppMode::Search => AppMode::Help,
        };
    }

    /// Toggle focus between input and results
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusTarget::Input => FocusTarget::Results,
            FocusTarget::Results => FocusTarget::Input,
        };
    }

    pub fn is_input_focused(&self) -> bool {
        self.focus == FocusTarget::Input
    }

    pub fn is_results_focused(&self) -> bool {
        self.focus == FocusTarget::Results
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char, now: Instant) {
        let mut query = self.search.query.clone();
        query.insert(byte_index(&query, self.cursor_position), c);
        self.cursor_position += 1;
        self.search.set_query(query, now);
    }

    /// Remove the character before the cursor
    pub fn delete_char(&mut self, now: Instant) {
        if self.cursor_position == 0 {
            return;
        }
        let mut query = self.search.query.clone();
        query.remove(byte_index(&query, self.cursor_position - 1));
        self.cursor_position -= 1;
        self.search.set_query(query, now);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.search.query.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Clear the query. Prior results stay in memory but are hidden.
    pub fn clear_query(&mut self, now: Instant) {
        self.cursor_position = 0;
        self.selected_index = 0;
        self.search.set_query(String::new(), now);
    }

    /// Advance timers; returns a search to dispatch when one is due.
    pub fn tick(&mut self, now: Instant) -> Option<SearchRequest> {
        let request = self.search.poll(now)?;
        self.selected_index = 0;
        self.ui.scroll_offset = 0;
        Some(request)
    }

    /// Apply a finished search.
    pub fn apply_search_result(&mut self, id: u64, outcome: marquee_core::Result<Vec<Movie>>) {
        let failure = outcome.as_ref().err().map(|err| err.to_string());
        if self.search.complete(id, outcome) {
            if failure.is_some() {
                self.status = failure;
            }
            self.clamp_selection();
        }
    }

    /// Movies currently on screen.
    pub fn visible_movies(&self) -> &[Movie] {
        if self.search.is_loading || self.search.has_error {
            return &[];
        }
        if self.search.show_nominated_only {
            return self.nominations.movies();
        }
        if self.search.has_query() {
            return &self.search.results;
        }
        &[]
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.visible_movies().get(self.selected_index)
    }

    /// Nominate the selected movie, or withdraw it if already nominated.
    pub fn toggle_selected_nomination(&mut self) {
        let Some(movie) = self.selected_movie().cloned() else {
            return;
        };

        let result = if self.nominations.contains(&movie) {
            self.nominations.remove(&movie).map(|_| format!("Withdrew {movie}"))
        } else {
            self.nominations.add(movie.clone()).map(|outcome| match outcome {
                AddOutcome::Added => format!(
                    "Nominated {movie} ({}/{NOMINATION_LIMIT})",
                    self.nominations.len()
                ),
                AddOutcome::LimitReached => {
                    format!("Nomination limit of {NOMINATION_LIMIT} reached")
                }
                AddOutcome::AlreadyNominated => format!("{movie} is already nominated"),
            })
        };

        self.status = Some(match result {
            Ok(msg) => msg,
            Err(err) => {
                tracing::error!(error = %err, "Failed to save nominations");
                format!("Failed to save nominations: {err}")
            }
        });

        self.search.sync_nominations(self.nominations.len());
        self.clamp_selection();
    }

    /// Switch between search results and nominations only.
    pub fn toggle_nominated_only(&mut self) {
        self.search.toggle_nominated_only(self.nominations.len());
        self.selected_index = 0;
        self.ui.scroll_offset = 0;
        if self.visible_movies().is_empty() {
            self.focus = FocusTarget::Input;
        }
    }

    /// Banner for the current state, if any.
    pub fn banner(&self) -> Option<Banner> {
        let search = &self.search;
        if search.has_query() && search.has_error && !search.is_loading && !search.show_nominated_only
        {
            return Some(Banner {
                kind: BannerKind::Danger,
                text: SEARCH_FAILED_TEXT,
            });
        }
        if !search.has_error
            && !search.is_loading
            && self.nominations.is_full()
            && !search.results.is_empty()
        {
            return Some(Banner {
                kind: BannerKind::Info,
                text: LIMIT_REACHED_TEXT,
            });
        }
        None
    }

    /// Text shown in place of an empty list.
    pub fn placeholder(&self) -> Option<&'static str> {
        let search = &self.search;
        if search.show_nominated_only {
            return None;
        }
        if !search.has_query() {
            return Some(WELCOME_TEXT);
        }
        if search.is_loading {
            return Some(SEARCHING_TEXT);
        }
        if !search.has_error && search.results.is_empty() {
            return Some(NO_RESULTS_TEXT);
        }
        None
    }

    /// Title of the list block.
    pub fn list_title(&self) -> String {
        if self.search.show_nominated_only {
            format!(
                "NOMINATIONS ({}/{NOMINATION_LIMIT})",
                self.nominations.len()
            )
        } else if self.search.has_query() {
            format!(
                "RESULTS FOR \"{}\" ({})",
                self.search.query.trim(),
                self.visible_movies().len()
            )
        } else {
            "RESULTS".to_string()
        }
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.visible_movies().len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Jump to top
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to bottom
    pub fn select_last(&mut self) {
        self.selected_index = self.visible_movies().len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_movies().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }
}

/// UI state
pub struct UiState {
    /// Scroll offset for the movie list
    pub scroll_offset: usize,
    /// Viewport height
    pub viewport_height: usize,
}

impl UiState {
    /// Create a new UI state
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            viewport_height: 0,
        }
    }

    /// Update scroll offset to keep selection visible
    pub fn update_scroll(&mut self, selected: usize) {
        let height = self.viewport_height.max(1);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + height {
            self.scroll_offset = selected + 1 - height;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::search::DEFAULT_DEBOUNCE;
    use marquee_core::{Error, MemoryStore};
    use std::time::Duration;

    fn state() -> AppState {
        let nominations = NominationStore::open(Box::new(MemoryStore::new())).unwrap();
        AppState::new(SearchController::default(), nominations)
    }

    fn movie(title: &str) -> Movie {
        Movie::new(title, "1999", "http://x/p.jpg")
    }

    /// Type `query` and complete its search with `results`.
    fn search_with(app: &mut AppState, query: &str, results: Vec<Movie>) {
        let start = Instant::now();
        for c in query.chars() {
            app.insert_char(c, start);
        }
        let request = app.tick(start + DEFAULT_DEBOUNCE).unwrap();
        app.apply_search_result(request.id, Ok(results));
    }

    #[test]
    fn typing_edits_query_at_cursor() {
        let mut app = state();
        let now = Instant::now();
        for c in "mtrix".chars() {
            app.insert_char(c, now);
        }
        app.cursor_position = 1;
        app.insert_char('a', now);
        assert_eq!(app.search.query, "matrix");

        app.move_cursor_right();
        app.delete_char(now);
        assert_eq!(app.search.query, "marix");
        assert_eq!(app.cursor_position, 2);
    }

    #[test]
    fn editing_handles_multibyte_characters() {
        let mut app = state();
        let now = Instant::now();
        for c in "amélie".chars() {
            app.insert_char(c, now);
        }
        app.cursor_position = 3;
        app.delete_char(now);
        assert_eq!(app.search.query, "amlie");
    }

    #[test]
    fn welcome_shown_without_query() {
        let app = state();
        assert_eq!(app.placeholder(), Some(WELCOME_TEXT));
        assert!(app.visible_movies().is_empty());
        assert_eq!(app.banner(), None);
    }

    #[test]
    fn results_become_visible_after_search() {
        let mut app = state();
        search_with(&mut app, "matrix", vec![movie("The Matrix")]);
        assert_eq!(app.visible_movies(), &[movie("The Matrix")]);
        assert_eq!(app.placeholder(), None);
        assert_eq!(app.list_title(), "RESULTS FOR \"matrix\" (1)");
    }

    #[test]
    fn empty_results_show_no_movies_found() {
        let mut app = state();
        search_with(&mut app, "zzzzz", Vec::new());
        assert_eq!(app.placeholder(), Some(NO_RESULTS_TEXT));
        assert!(!app.search.has_error);
    }

    #[test]
    fn failure_shows_danger_banner_and_hides_results() {
        let mut app = state();
        search_with(&mut app, "heat", vec![movie("Heat")]);

        let now = Instant::now();
        app.insert_char('!', now);
        let request = app.tick(now + DEFAULT_DEBOUNCE).unwrap();
        app.apply_search_result(
            request.id,
            Err(Error::SearchFailed("timed out".to_string())),
        );

        assert_eq!(
            app.banner(),
            Some(Banner {
                kind: BannerKind::Danger,
                text: SEARCH_FAILED_TEXT
            })
        );
        assert!(app.visible_movies().is_empty());
        assert_eq!(app.search.results, vec![movie("Heat")]);
        assert!(app.status.as_deref().unwrap_or_default().contains("timed out"));
    }

    #[test]
    fn toggling_selected_movie_nominates_and_withdraws() {
        let mut app = state();
        search_with(&mut app, "alien", vec![movie("Alien"), movie("Aliens")]);
        app.select_next();

        app.toggle_selected_nomination();
        assert!(app.nominations.contains(&movie("Aliens")));
        assert_eq!(app.status.as_deref(), Some("Nominated Aliens (1999) (1/5)"));

        app.toggle_selected_nomination();
        assert!(app.nominations.is_empty());
        assert_eq!(app.status.as_deref(), Some("Withdrew Aliens (1999)"));
    }

    #[test]
    fn full_list_shows_info_banner_and_blocks_more() {
        let mut app = state();
        let results: Vec<Movie> = (0..7).map(|i| movie(&format!("Movie {i}"))).collect();
        search_with(&mut app, "movie", results);

        for _ in 0..6 {
            app.toggle_selected_nomination();
            app.select_next();
        }

        assert_eq!(app.nominations.len(), NOMINATION_LIMIT);
        assert!(!app.nominations.contains(&movie("Movie 5")));
        assert_eq!(
            app.status.as_deref(),
            Some("Nomination limit of 5 reached")
        );
        assert_eq!(
            app.banner().map(|b| b.kind),
            Some(BannerKind::Info)
        );
    }

    #[test]
    fn nominated_only_view_lists_nominations_and_resets_when_emptied() {
        let mut app = state();
        search_with(&mut app, "up", vec![movie("Up"), movie("Jaws")]);
        app.toggle_selected_nomination();

        app.toggle_nominated_only();
        assert!(app.search.show_nominated_only);
        assert_eq!(app.visible_movies(), &[movie("Up")]);
        assert_eq!(app.list_title(), "NOMINATIONS (1/5)");

        // Withdrawing the last nomination drops back to results.
        app.toggle_selected_nomination();
        assert!(!app.search.show_nominated_only);
        assert_eq!(app.visible_movies().len(), 2);
    }

    #[test]
    fn nominated_only_needs_a_nomination() {
        let mut app = state();
        app.toggle_nominated_only();
        assert!(!app.search.show_nominated_only);
    }

    #[test]
    fn new_search_leaves_nominated_only_view() {
        let mut app = state();
        search_with(&mut app, "up", vec![movie("Up")]);
        app.toggle_selected_nomination();
        app.toggle_nominated_only();

        let now = Instant::now();
        app.insert_char('s', now);
        assert!(app.search.show_nominated_only);
        app.tick(now + DEFAULT_DEBOUNCE + Duration::from_millis(1)).unwrap();
        assert!(!app.search.show_nominated_only);
        assert_eq!(app.placeholder(), Some(SEARCHING_TEXT));
    }

    #[test]
    fn scroll_follows_selection() {
        let mut ui = UiState::new();
        ui.viewport_height = 3;
        ui.update_scroll(5);
        assert_eq!(ui.scroll_offset, 3);
        ui.update_scroll(1);
        assert_eq!(ui.scroll_offset, 1);
    }
}
