//! Champollion command-line entry point
//!
//! Runs a single search against the configured SearXNG instance and prints
//! the results.

use anyhow::Result;
use champollion::{Client, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Query used when none is given on the command line
const DEFAULT_QUERY: &str = "golang";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Champollion v{}", champollion::VERSION);

    let settings = Settings::load();
    info!("Using SearXNG instance at {}", settings.searxng_url);

    let client = Client::with_http_client(settings.searxng_url.clone(), settings.http_client()?);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = if args.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        args.join(" ")
    };

    let response = client.search(&query, None).await?;
    info!("Search '{}' returned {} results", query, response.len());

    for (i, result) in response.results.iter().enumerate() {
        println!("{}. {}\n   {}", i + 1, result.title, result.url);
        if let Some(ref content) = result.content {
            println!("   {}", content);
        }
    }

    if !response.suggestions.is_empty() {
        println!("\nSuggestions: {}", response.suggestions.join(", "));
    }

    Ok(())
}
