//! Search controller: debounced query dispatch and result state.

use crate::debounce::Debouncer;
use crate::{Movie, Result};
use std::time::{Duration, Instant};

/// Default quiet period before a typed query is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// A search to hand to a [`SearchProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Monotonic id assigned at dispatch.
    pub id: u64,
    pub query: String,
    pub page: u32,
}

/// The external movie-search collaborator.
pub trait SearchProvider: Send {
    /// Run one search. No matches is `Ok(vec![])`; any failure is
    /// [`crate::Error::SearchFailed`].
    fn search(&self, request: &SearchRequest) -> Result<Vec<Movie>>;
}

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
}

/// Transient search state plus the debounce timer that feeds it.
#[derive(Debug)]
pub struct SearchController {
    pub query: String,
    pub results: Vec<Movie>,
    pub is_loading: bool,
    pub has_error: bool,
    pub show_nominated_only: bool,
    debouncer: Debouncer<String>,
    next_id: u64,
    latest_id: Option<u64>,
}

impl SearchController {
    pub fn new(debounce: Duration) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            is_loading: false,
            has_error: false,
            show_nominated_only: false,
            debouncer: Debouncer::new(debounce),
            next_id: 1,
            latest_id: None,
        }
    }

    /// Update the query and restart the debounce timer.
    ///
    /// A blank query cancels any pending search and schedules none.
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.debouncer.cancel();
        } else {
            self.debouncer.schedule(trimmed.to_string(), now);
        }
    }

    /// Dispatch the pending query if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        let query = self.debouncer.poll(now)?;
        let id = self.next_id;
        self.next_id += 1;
        self.latest_id = Some(id);

        self.is_loading = true;
        self.has_error = false;
        self.show_nominated_only = false;

        tracing::debug!(id, %query, "Dispatching search");
        Some(SearchRequest {
            id,
            query,
            page: 1,
        })
    }

    /// Apply the outcome of request `id`.
    ///
    /// Outcomes for anything but the latest dispatched request are dropped;
    /// returns whether the outcome was applied.
    pub fn complete(&mut self, id: u64, outcome: Result<Vec<Movie>>) -> bool {
        if self.latest_id != Some(id) {
            tracing::debug!(id, latest = ?self.latest_id, "Ignoring stale search result");
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(results) => {
                tracing::debug!(id, count = results.len(), "Search complete");
                self.results = results;
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Search failed");
                self.has_error = true;
            }
        }
        true
    }

    pub fn phase(&self) -> SearchPhase {
        if self.is_loading {
            SearchPhase::Searching
        } else {
            SearchPhase::Idle
        }
    }

    /// When the pending search becomes due, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Flip "nominated only". Turning it on requires at least one nomination.
    pub fn toggle_nominated_only(&mut self, nomination_count: usize) {
        self.show_nominated_only = !self.show_nominated_only && nomination_count > 0;
    }

    /// Force "nominated only" off once the nomination list is empty.
    pub fn sync_nominations(&mut self, nomination_count: usize) {
        if nomination_count == 0 {
            self.show_nominated_only = false;
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
