//! Search options and response data models

use serde::{Deserialize, Deserializer, Serialize};

/// Optional parameters narrowing a search.
///
/// Every field is independent. Empty lists, `None`, an empty language and a
/// page of `0` are all left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Categories to search in (e.g. "general", "images")
    pub categories: Vec<String>,
    /// Engines to query
    pub engines: Vec<String>,
    /// Language code (e.g. "en-US")
    pub language: Option<String>,
    /// Page number (1-indexed)
    pub pageno: Option<u32>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Replace the category list
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Add an engine
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engines.push(engine.into());
        self
    }

    /// Replace the engine list
    pub fn with_engines<I, S>(mut self, engines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.engines = engines.into_iter().map(Into::into).collect();
        self
    }

    /// Set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.pageno = Some(page);
        self
    }

    /// Query parameters contributed by these options, in key order
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !self.categories.is_empty() {
            params.push(("categories", self.categories.join(",")));
        }
        if !self.engines.is_empty() {
            params.push(("engines", self.engines.join(",")));
        }
        if let Some(lang) = self.language.as_deref().filter(|l| !l.is_empty()) {
            params.push(("language", lang.to_string()));
        }
        if let Some(page) = self.pageno.filter(|p| *p > 0) {
            params.push(("pageno", page.to_string()));
        }

        params
    }
}

/// A single search hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the result
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// URL of the result
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Image URL (image results)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_src: Option<String>,
    /// Alternative thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Content snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Author of the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Embeddable iframe source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iframe_src: Option<String>,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Results and suggestions returned for one query, in upstream order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    /// Alternate queries proposed by the service
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub suggestions: Vec<String>,
}

impl SearchResponse {
    /// Number of results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when there are no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// JSON null leaves the field at its zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
