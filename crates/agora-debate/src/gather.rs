//! Evidence gathering: one search per philosopher, one encyclopedia lookup
//! per search result
//!
//! This stage is infallible. A failed search leaves that philosopher with
//! no evidence; a failed lookup leaves that single item unannotated. The
//! debate proceeds either way.

use std::sync::Arc;

use agora_core::{EvidenceItem, PhilosopherProfile, PhilosopherSet, SourcedPhilosopher};
use agora_retrieval::{SearchProvider, SummaryProvider};

/// Title shown when nothing usable could be derived from a search result.
const UNTITLED_SOURCE: &str = "Source";

/// Attaches annotated evidence to each philosopher.
#[derive(Debug, Clone)]
pub struct EvidenceGatherer {
    search: Arc<dyn SearchProvider>,
    encyclopedia: Arc<dyn SummaryProvider>,
    search_results: usize,
}

impl EvidenceGatherer {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        encyclopedia: Arc<dyn SummaryProvider>,
        search_results: usize,
    ) -> Self {
        Self {
            search,
            encyclopedia,
            search_results,
        }
    }

    /// Gather evidence for every philosopher, in speaking order.
    pub async fn gather(&self, set: &PhilosopherSet) -> Vec<SourcedPhilosopher> {
        let mut participants = Vec::with_capacity(set.philosophers.len());
        for profile in &set.philosophers {
            let sources = self.gather_for(profile).await;
            tracing::debug!(
                philosopher = %profile.name,
                sources = sources.len(),
                "evidence gathered"
            );
            participants.push(SourcedPhilosopher {
                profile: profile.clone(),
                sources,
            });
        }
        participants
    }

    async fn gather_for(&self, profile: &PhilosopherProfile) -> Vec<EvidenceItem> {
        let query = format!("{} philosophy arguments criticisms", profile.school);

        let results = match self.search.search(&query, self.search_results).await {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(
                    philosopher = %profile.name,
                    provider = %self.search.name(),
                    error = %err,
                    "search failed, continuing without evidence"
                );
                return Vec::new();
            }
        };

        let mut sources = Vec::with_capacity(results.len());
        for result in results {
            let lookup_title = result.lookup_title();

            let encyclopedia = match lookup_title.as_deref() {
                Some(title) => match self.encyclopedia.summary(title).await {
                    Ok(summary) => Some(summary),
                    Err(err) => {
                        tracing::debug!(
                            title,
                            provider = %self.encyclopedia.name(),
                            error = %err,
                            "summary lookup failed, leaving item unannotated"
                        );
                        None
                    }
                },
                None => None,
            };

            sources.push(EvidenceItem {
                title: lookup_title.unwrap_or_else(|| UNTITLED_SOURCE.to_string()),
                snippet: result.snippet_text().to_string(),
                url: result.url.clone(),
                encyclopedia,
            });
        }
        sources
    }
}
