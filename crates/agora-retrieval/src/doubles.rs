//! Test doubles for the lookup collaborators
//!
//! Shipped as library code (not `#[cfg(test)]`) so downstream crates can
//! drive the full pipeline in their own tests without network access.

use async_trait::async_trait;

use agora_core::{PageSummary, SearchResult};

use crate::encyclopedia::{LookupError, SummaryProvider};
use crate::search::{SearchError, SearchProvider};

/// Search double that returns the same canned results for every query.
#[derive(Debug, Default)]
pub struct StaticSearch {
    results: Vec<SearchResult>,
}

impl StaticSearch {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    /// Canned results with just titles and URLs.
    pub fn with_titles(titles: &[&str]) -> Self {
        let results = titles
            .iter()
            .map(|t| SearchResult {
                title: Some(t.to_string()),
                url: Some(format!("https://example.com/{}", t.replace(' ', "-"))),
                content: Some(format!("{t}. Background reading.")),
                ..Default::default()
            })
            .collect();
        Self::new(results)
    }
}

#[async_trait]
impl SearchProvider for StaticSearch {
    fn name(&self) -> &str {
        "static-search"
    }

    async fn search(
        &self,
        _query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Ok(self.results.iter().take(max_results).cloned().collect())
    }
}

/// Search double that fails every query.
#[derive(Debug, Default)]
pub struct FailingSearch;

#[async_trait]
impl SearchProvider for FailingSearch {
    fn name(&self) -> &str {
        "failing-search"
    }

    async fn search(
        &self,
        _query: &str,
        _max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Err(SearchError::ConnectionFailed("search is down".to_string()))
    }
}

/// Summary double that answers every title with a one-line summary.
#[derive(Debug, Default)]
pub struct StaticSummaries;

#[async_trait]
impl SummaryProvider for StaticSummaries {
    fn name(&self) -> &str {
        "static-summaries"
    }

    async fn summary(&self, title: &str) -> Result<PageSummary, LookupError> {
        Ok(PageSummary {
            title: title.to_string(),
            summary: Some(format!("{title}, in brief.")),
            url: Some(format!(
                "https://encyclopedia.example/{}",
                title.replace(' ', "_")
            )),
        })
    }
}

/// Summary double that fails every lookup.
#[derive(Debug, Default)]
pub struct FailingSummaries;

#[async_trait]
impl SummaryProvider for FailingSummaries {
    fn name(&self) -> &str {
        "failing-summaries"
    }

    async fn summary(&self, _title: &str) -> Result<PageSummary, LookupError> {
        Err(LookupError::ConnectionFailed(
            "encyclopedia is down".to_string(),
        ))
    }
}
