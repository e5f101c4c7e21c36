//! Blocking HTTP client for the OMDb search endpoint.

use crate::response::{error_message, parse_search_response, SearchPage};
use crate::OmdbError;
use marquee_core::config::OmdbConfig;
use marquee_core::{Movie, SearchProvider, SearchRequest};
use reqwest::blocking::Client;

/// Only feature films are searched.
const RESULT_TYPE: &str = "movie";

/// OMDb client.
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Build a client from configuration. Fails without an API key.
    pub fn new(config: &OmdbConfig) -> Result<Self, OmdbError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(OmdbError::MissingApiKey);
        }

        let http = Client::builder()
            .user_agent(format!("marquee/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch one page of movies matching `query`.
    pub fn search_page(&self, query: &str, page: u32) -> Result<SearchPage, OmdbError> {
        let page_param = page.to_string();
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("page", page_param.as_str()),
                ("type", RESULT_TYPE),
            ])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(OmdbError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let result = parse_search_response(&body)?;
        tracing::debug!(
            %query,
            page,
            count = result.movies.len(),
            total = result.total_results,
            "OMDb search"
        );
        Ok(result)
    }
}

impl SearchProvider for OmdbClient {
    fn search(&self, request: &SearchRequest) -> marquee_core::Result<Vec<Movie>> {
        Ok(self.search_page(&request.query, request.page)?.movies)
    }
}
