//! Encyclopedia summary provider (Wikipedia REST API)

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use agora_core::PageSummary;

/// Errors from summary lookups
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("empty page title")]
    EmptyTitle,
    #[error("invalid base URL: {0}")]
    BadUrl(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for title-in, summary-out encyclopedia providers
#[async_trait]
pub trait SummaryProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Fetch the summary for a page title
    async fn summary(&self, title: &str) -> Result<PageSummary, LookupError>;
}

/// Wikipedia REST summary response format (the fields we read)
#[derive(Debug, Deserialize)]
struct WikiSummaryResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
    #[serde(default)]
    canonical_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<PlatformUrls>,
}

#[derive(Debug, Deserialize)]
struct PlatformUrls {
    #[serde(default)]
    page: Option<String>,
}

impl WikiSummaryResponse {
    /// Collapse the response into a [`PageSummary`], applying the endpoint's
    /// fallback chains for summary text and page URL.
    fn into_summary(self, requested_title: &str) -> PageSummary {
        let summary = self.extract.or(self.description);
        let page_url = self
            .content_urls
            .and_then(|c| c.desktop)
            .and_then(|d| d.page)
            .or(self.canonical_url)
            .or(self.url);
        PageSummary {
            title: self.title.unwrap_or_else(|| requested_title.to_string()),
            summary,
            url: page_url,
        }
    }
}

/// Wikipedia page-summary provider
#[derive(Debug)]
pub struct WikipediaProvider {
    /// HTTP client
    client: reqwest::Client,
    /// Base URL
    base_url: String,
    /// Per-request timeout
    timeout: Duration,
}

impl Default for WikipediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WikipediaProvider {
    /// Create a provider against en.wikipedia.org
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: "https://en.wikipedia.org".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Set a custom base URL (useful for proxy or test setups)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Build the summary URL with the title percent-encoded as one segment.
    fn summary_url(&self, title: &str) -> Result<reqwest::Url, LookupError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| LookupError::BadUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::BadUrl("base URL cannot have segments".to_string()))?
            .pop_if_empty()
            .extend(["api", "rest_v1", "page", "summary", title]);
        Ok(url)
    }
}

#[async_trait]
impl SummaryProvider for WikipediaProvider {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn summary(&self, title: &str) -> Result<PageSummary, LookupError> {
        if title.trim().is_empty() {
            return Err(LookupError::EmptyTitle);
        }

        let url = self.summary_url(title)?;
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LookupError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let api_response: WikiSummaryResponse = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

        Ok(api_response.into_summary(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_url_encodes_title() {
        let provider = WikipediaProvider::new();
        let url = provider.summary_url("Free will").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Free%20will"
        );
    }

    #[tokio::test]
    async fn empty_title_is_an_error() {
        let provider = WikipediaProvider::new();
        let err = provider.summary("   ").await.unwrap_err();
        assert!(matches!(err, LookupError::EmptyTitle));
    }

    #[test]
    fn response_prefers_extract_then_description() {
        let raw = r#"{
            "title": "Determinism",
            "description": "philosophical view",
            "extract": "Determinism is the philosophical view that all events are determined.",
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Determinism"}}
        }"#;
        let response: WikiSummaryResponse = serde_json::from_str(raw).unwrap();
        let summary = response.into_summary("Determinism");
        assert!(summary.summary.unwrap().starts_with("Determinism is"));
        assert_eq!(
            summary.url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Determinism")
        );
    }

    #[test]
    fn response_falls_back_to_description_and_canonical_url() {
        let raw = r#"{"description": "a view", "canonical_url": "https://example.org/p"}"#;
        let response: WikiSummaryResponse = serde_json::from_str(raw).unwrap();
        let summary = response.into_summary("Fallback");
        assert_eq!(summary.title, "Fallback");
        assert_eq!(summary.summary.as_deref(), Some("a view"));
        assert_eq!(summary.url.as_deref(), Some("https://example.org/p"));
    }
}
