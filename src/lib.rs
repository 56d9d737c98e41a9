//! Champollion: a thin client for the SearXNG JSON search API
//!
//! Resolve the instance URL with [`config`], bind a [`Client`] to it and call
//! [`Client::search`] to get a [`SearchResponse`].

pub mod config;
pub mod error;
pub mod search;

pub use config::Settings;
pub use error::{Error, Result};
pub use search::{Client, SearchOptions, SearchResponse, SearchResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
