//! OMDb search response decoding.

use crate::OmdbError;
use marquee_core::Movie;
use serde::Deserialize;

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub movies: Vec<Movie>,
    /// Total matches across all pages, as reported by OMDb.
    pub total_results: usize,
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    #[serde(rename = "Search", default)]
    search: Vec<Movie>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Response", default)]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

/// Decode a search response body.
///
/// OMDb answers "no matches" (and "too many results") with HTTP 200 and
/// `"Response": "False"`; those become an empty page.
pub fn parse_search_response(body: &str) -> Result<SearchPage, OmdbError> {
    let raw: RawSearchResponse = serde_json::from_str(body)?;

    if !raw.response.eq_ignore_ascii_case("true") {
        tracing::debug!(
            message = raw.error.as_deref().unwrap_or("unknown"),
            "OMDb reported no results"
        );
        return Ok(SearchPage::default());
    }

    let total_results = raw
        .total_results
        .as_deref()
        .and_then(|t| t.parse().ok())
        .unwrap_or(raw.search.len());

    Ok(SearchPage {
        movies: raw.search,
        total_results,
    })
}

/// Pull the `Error` message out of an error body, if it has one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<RawSearchResponse>(body)
        .ok()
        .and_then(|raw| raw.error)
}
