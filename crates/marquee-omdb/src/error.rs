//! Error types for the OMDb client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("OMDb API key is not configured (set MARQUEE_OMDB_API_KEY or omdb.api_key)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OMDb returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid OMDb response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<OmdbError> for marquee_core::Error {
    fn from(err: OmdbError) -> Self {
        marquee_core::Error::SearchFailed(err.to_string())
    }
}
