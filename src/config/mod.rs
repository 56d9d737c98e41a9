//! Configuration module for Champollion
//!
//! Resolves settings from an optional YAML file and the process environment.

mod settings;

pub use settings::*;

/// Environment variable overriding the search service base URL
pub const SEARXNG_URL_VAR: &str = "SEARXNG_URL";

/// Environment variable naming a settings file
pub const SETTINGS_PATH_VAR: &str = "CHAMPOLLION_SETTINGS_PATH";

/// Base URL used when nothing else is configured
pub const DEFAULT_SEARXNG_URL: &str = "http://localhost:8080";

/// Return the value of `key` from the environment, or `fallback` when unset.
///
/// A variable set to the empty string counts as set and yields `""`.
pub fn env_var_or(key: &str, fallback: &str) -> String {
    match std::env::var_os(key) {
        Some(value) => value.to_string_lossy().into_owned(),
        None => fallback.to_string(),
    }
}
