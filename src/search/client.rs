//! HTTP client for the SearXNG JSON search API

use super::models::{SearchOptions, SearchResponse};
use crate::error::{DecodeError, Error, Result};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};
use url::Url;

/// Path segment appended to the base URL
const SEARCH_PATH: &str = "search";

/// Client bound to a single SearXNG instance.
///
/// The base URL is stored as given and only validated when a search is made.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client using a default HTTP transport
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client on top of a caller-configured transport (timeouts, proxies, ...)
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Base URL this client is bound to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for a query without sending anything.
    ///
    /// `format=json` and `q` are always present; option parameters only when set.
    pub fn search_url(&self, query: &str, options: Option<&SearchOptions>) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| Error::invalid_base_url(&self.base_url, e))?;

        let mut params: BTreeMap<&str, String> = BTreeMap::new();
        params.insert("format", "json".to_string());
        params.insert("q", query.to_string());
        if let Some(opts) = options {
            params.extend(opts.params());
        }

        url.path_segments_mut()
            .map_err(|_| Error::invalid_base_url(&self.base_url, "URL cannot have a path"))?
            .pop_if_empty()
            .push(SEARCH_PATH);

        url.set_query(None);
        url.query_pairs_mut().extend_pairs(&params);

        Ok(url)
    }

    /// Search the instance for `query`.
    ///
    /// Sends exactly one GET request. The HTTP status is not inspected beyond
    /// a log line: any body that decodes as a search response is returned.
    #[instrument(skip(self, options), fields(base_url = %self.base_url))]
    pub async fn search(
        &self,
        query: &str,
        options: Option<&SearchOptions>,
    ) -> Result<SearchResponse> {
        let url = self.search_url(query, options)?;
        debug!("Sending search request: {}", url);

        let response = self.http.get(url).send().await.map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search service returned status {}", status);
        }

        let body = response.bytes().await.map_err(DecodeError::Read)?;
        let search_response: SearchResponse =
            serde_json::from_slice(&body).map_err(DecodeError::Json)?;

        debug!(
            "Decoded {} results and {} suggestions",
            search_response.results.len(),
            search_response.suggestions.len()
        );

        Ok(search_response)
    }
}
