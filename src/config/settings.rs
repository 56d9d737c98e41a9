//! Settings structures for Champollion

use super::{env_var_or, DEFAULT_SEARXNG_URL, SEARXNG_URL_VAR, SETTINGS_PATH_VAR};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the SearXNG instance
    pub searxng_url: String,
    pub outgoing: OutgoingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            searxng_url: DEFAULT_SEARXNG_URL.to_string(),
            outgoing: OutgoingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.searxng_url = env_var_or(SEARXNG_URL_VAR, &self.searxng_url);
    }

    /// Load settings from the first file found, or defaults, then apply the environment.
    ///
    /// An unreadable or malformed file is logged and replaced by the defaults.
    pub fn load() -> Self {
        let mut settings = match Self::find_file() {
            Some(path) => {
                info!("Loading settings from: {}", path.display());
                Self::from_file(&path).unwrap_or_else(|e| {
                    warn!("Ignoring settings file {}: {}", path.display(), e);
                    Self::default()
                })
            }
            None => {
                info!("No settings file found, using defaults");
                Self::default()
            }
        };
        settings.merge_env();
        settings
    }

    fn find_file() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_PATH_VAR) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let mut candidates = vec![PathBuf::from("champollion.yml")];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("champollion/settings.yml"));
        }
        candidates.into_iter().find(|p| p.exists())
    }

    /// Build the HTTP transport described by the outgoing settings
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.outgoing.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(ref ua) = self.outgoing.user_agent {
            builder = builder.user_agent(ua.as_str());
        }

        Ok(builder.build()?)
    }
}

/// Outgoing request settings. Unset fields keep the transport defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds (none = no timeout)
    pub request_timeout: Option<f64>,
    /// User-Agent header override
    pub user_agent: Option<String>,
}

impl OutgoingSettings {
    /// Timeout as a duration; non-positive or non-finite values are ignored
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout
            .filter(|t| t.is_finite() && *t > 0.0)
            .map(Duration::from_secs_f64)
    }
}
