//! The bounded nomination list and its persistence.

use crate::storage::{FileStore, KeyValueStore};
use crate::{Error, Movie, Result};
use std::path::Path;

/// Maximum number of nominations a user may hold.
pub const NOMINATION_LIMIT: usize = 5;

/// Storage key the encoded list lives under.
pub const STORAGE_KEY: &str = "nominated-movies";

/// Result of [`NominationStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The list already holds [`NOMINATION_LIMIT`] movies.
    LimitReached,
    /// An identical record is already nominated.
    AlreadyNominated,
}

/// Encode a nomination list for storage.
pub fn encode(movies: &[Movie]) -> Result<String> {
    Ok(serde_json::to_string(movies)?)
}

/// Decode a stored nomination list.
///
/// `null` decodes to an empty list. Entries past [`NOMINATION_LIMIT`] are
/// dropped.
pub fn decode(raw: &str) -> Result<Vec<Movie>> {
    let movies: Option<Vec<Movie>> = serde_json::from_str(raw)
        .map_err(|e| Error::Serialization(format!("stored nominations: {e}")))?;
    let mut movies = movies.unwrap_or_default();

    if movies.len() > NOMINATION_LIMIT {
        tracing::warn!(
            stored = movies.len(),
            limit = NOMINATION_LIMIT,
            "Stored nomination list exceeds limit, truncating"
        );
        movies.truncate(NOMINATION_LIMIT);
    }

    Ok(movies)
}

/// In-memory nomination list mirrored to a [`KeyValueStore`].
///
/// Every mutation writes the whole list back under [`STORAGE_KEY`] before
/// returning. The in-memory copy only changes once that write succeeds.
pub struct NominationStore {
    store: Box<dyn KeyValueStore>,
    movies: Vec<Movie>,
}

impl NominationStore {
    /// Load the list from `store`. A missing key is an empty list.
    pub fn open(store: Box<dyn KeyValueStore>) -> Result<Self> {
        let movies = match store.get(STORAGE_KEY)? {
            Some(raw) => decode(&raw)?,
            None => Vec::new(),
        };
        tracing::debug!(count = movies.len(), "Loaded nominations");
        Ok(Self { store, movies })
    }

    /// Wrap `store` with an empty in-memory list, ignoring what it holds.
    ///
    /// The stored value is left untouched until the next mutation.
    pub fn empty(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            movies: Vec::new(),
        }
    }

    /// Open the file-backed list at `path`.
    ///
    /// A damaged store file, or a stored value that fails to decode, is
    /// logged and replaced by an empty in-memory list. The file keeps its
    /// contents until the next mutation.
    pub fn open_file(path: &Path) -> Result<Self> {
        let store = match FileStore::open(path) {
            Ok(store) => store,
            Err(Error::Storage(msg)) => {
                tracing::warn!(path = %path.display(), %msg, "Ignoring unreadable store file");
                return Ok(Self::empty(Box::new(FileStore::empty(path))));
            }
            Err(err) => return Err(err),
        };

        let store_path = store.path().to_path_buf();
        match Self::open(Box::new(store)) {
            Err(Error::Serialization(msg)) => {
                tracing::warn!(path = %store_path.display(), %msg, "Ignoring unreadable nominations");
                Ok(Self::empty(Box::new(FileStore::open(&store_path)?)))
            }
            other => other,
        }
    }

    /// Append `movie` unless the list already holds it or is full.
    pub fn add(&mut self, movie: Movie) -> Result<AddOutcome> {
        if self.contains(&movie) {
            return Ok(AddOutcome::AlreadyNominated);
        }
        if self.is_full() {
            tracing::debug!(%movie, "Nomination limit reached");
            return Ok(AddOutcome::LimitReached);
        }

        let mut updated = self.movies.clone();
        updated.push(movie);
        self.commit(updated)?;
        Ok(AddOutcome::Added)
    }

    /// Remove every entry equal to `movie`. Returns how many were removed.
    pub fn remove(&mut self, movie: &Movie) -> Result<usize> {
        let updated: Vec<Movie> = self
            .movies
            .iter()
            .filter(|m| *m != movie)
            .cloned()
            .collect();
        let removed = self.movies.len() - updated.len();
        self.commit(updated)?;
        Ok(removed)
    }

    /// Remove every nomination.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())
    }

    pub fn contains(&self, movie: &Movie) -> bool {
        self.movies.iter().any(|m| m == movie)
    }

    pub fn is_full(&self) -> bool {
        self.movies.len() >= NOMINATION_LIMIT
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Slots left before the limit.
    pub fn remaining(&self) -> usize {
        NOMINATION_LIMIT.saturating_sub(self.movies.len())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn commit(&mut self, updated: Vec<Movie>) -> Result<()> {
        let encoded = encode(&updated)?;
        self.store.set(STORAGE_KEY, &encoded)?;
        tracing::info!(count = updated.len(), "Saved nominations");
        self.movies = updated;
        Ok(())
    }
}

impl std::fmt::Debug for NominationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominationStore")
            .field("movies", &self.movies)
            .finish_non_exhaustive()
    }
}
