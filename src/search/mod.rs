//! Search client module
//!
//! Builds SearXNG search URLs, sends the request and decodes the JSON
//! response into typed results.

mod client;
mod models;

pub use client::Client;
pub use models::*;
