//! Web search provider (Tavily API)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use agora_core::SearchResult;

/// Errors from search providers
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("TAVILY_API_KEY not set")]
    MissingApiKey,
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for ranked-snippet search providers
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Run a query, returning at most `max_results` ranked results
    async fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<SearchResult>, SearchError>;
}

/// Tavily API request format
#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

/// Tavily API response format
#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Tavily web-search provider
#[derive(Debug)]
pub struct TavilyProvider {
    /// API key; `None` makes every search fail with [`SearchError::MissingApiKey`]
    api_key: Option<String>,
    /// HTTP client
    client: reqwest::Client,
    /// Base URL
    base_url: String,
}

impl TavilyProvider {
    /// Create a new Tavily provider
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: Some(api_key.to_string()),
            client: reqwest::Client::new(),
            base_url: "https://api.tavily.com".to_string(),
        }
    }

    /// Create from the `TAVILY_API_KEY` environment variable.
    ///
    /// A missing key is not a constructor error: searches simply fail, and
    /// the gatherer degrades them to empty evidence like any other failure.
    pub fn from_env() -> Self {
        let api_key = std::env::var("TAVILY_API_KEY").ok();
        if api_key.is_none() {
            tracing::warn!("TAVILY_API_KEY not set; searches will return no evidence");
        }
        Self {
            api_key,
            client: reqwest::Client::new(),
            base_url: "https://api.tavily.com".to_string(),
        }
    }

    /// Set a custom base URL (useful for proxy or test setups)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

#[async_trait]
impl SearchProvider for TavilyProvider {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;
        let url = format!("{}/search", self.base_url);

        let request = TavilyRequest {
            api_key,
            query,
            max_results,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let api_response: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        Ok(api_response.results)
    }
}
