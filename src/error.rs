//! Error types for the search client
//!
//! A failed call never yields a partial response: every failure point
//! (URL construction, transport, body decoding) maps to exactly one variant.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::Client::search`]
#[derive(Debug, Error)]
pub enum Error {
    /// The configured base URL could not be used to build a request URL.
    /// No request is sent.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Building or sending the request failed (DNS, refused connection, timeout)
    #[error("request to search service failed")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read or did not match the expected shape
    #[error("failed to decode search response")]
    Decode(#[from] DecodeError),
}

/// Why a response body could not be turned into a search response
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("could not read response body")]
    Read(#[source] reqwest::Error),

    #[error("response body is not a valid search response")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_base_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the base URL was rejected before any network activity
    pub fn is_invalid_base_url(&self) -> bool {
        matches!(self, Self::InvalidBaseUrl { .. })
    }

    /// True for connection-level failures
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when the body was unreadable or not the expected JSON
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
