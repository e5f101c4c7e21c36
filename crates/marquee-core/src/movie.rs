//! The movie record shared by search results and nominations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Poster value OMDb uses when no artwork exists.
pub const NO_POSTER: &str = "N/A";

/// A movie as returned by the search collaborator.
///
/// Field names follow OMDb's casing on the wire so API responses and the
/// stored nomination list decode with the same type. Two records are equal
/// only when title, year, and poster all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster_uri: String,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        poster_uri: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            poster_uri: poster_uri.into(),
        }
    }

    /// Whether the record carries a usable poster URI.
    pub fn has_poster(&self) -> bool {
        !self.poster_uri.is_empty() && self.poster_uri != NO_POSTER
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}
