//! Retrieved evidence attached to each philosopher

use serde::{Deserialize, Serialize};

use crate::profile::PhilosopherProfile;

/// One raw record from the search collaborator.
///
/// Search backends disagree on field names, so everything is optional and
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SearchResult {
    /// Derive the title used for the encyclopedia lookup.
    ///
    /// Priority: explicit title, else query, else heading, else the first
    /// sentence (up to 200 chars) of the content/snippet text.
    pub fn lookup_title(&self) -> Option<String> {
        for field in [&self.title, &self.query, &self.heading] {
            if let Some(value) = field {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }

        let text = self
            .content
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.snippet.as_deref())?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let first_sentence = trimmed.split('.').next().unwrap_or(trimmed);
        Some(first_sentence.chars().take(200).collect())
    }

    /// Snippet text for display, from whichever field is populated.
    pub fn snippet_text(&self) -> &str {
        self.content
            .as_deref()
            .or(self.snippet.as_deref())
            .unwrap_or_default()
    }
}

/// An encyclopedia page summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSummary {
    /// Canonical page title
    pub title: String,
    /// Summary extract, when the page has one
    pub summary: Option<String>,
    /// Page URL
    pub url: Option<String>,
}

/// One annotated evidence item attached to a philosopher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Display/lookup title ("Source" when nothing derivable)
    pub title: String,
    /// Raw snippet from the search result
    pub snippet: String,
    /// Source URL, when the search result carried one
    pub url: Option<String>,
    /// Encyclopedia annotation; absent when the lookup degraded
    pub encyclopedia: Option<PageSummary>,
}

/// A philosopher paired with their (possibly empty) evidence list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcedPhilosopher {
    pub profile: PhilosopherProfile,
    pub sources: Vec<EvidenceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_title_prefers_explicit_title() {
        let result = SearchResult {
            title: Some("Stoicism".to_string()),
            query: Some("stoicism arguments".to_string()),
            ..Default::default()
        };
        assert_eq!(result.lookup_title().as_deref(), Some("Stoicism"));
    }

    #[test]
    fn lookup_title_falls_back_through_priority_order() {
        let result = SearchResult {
            title: Some("   ".to_string()),
            query: None,
            heading: Some("Critique of Pure Reason".to_string()),
            ..Default::default()
        };
        assert_eq!(
            result.lookup_title().as_deref(),
            Some("Critique of Pure Reason")
        );
    }

    #[test]
    fn lookup_title_takes_first_sentence_of_content() {
        let result = SearchResult {
            content: Some("Determinism is the view that all events are fixed. More text.".into()),
            ..Default::default()
        };
        assert_eq!(
            result.lookup_title().as_deref(),
            Some("Determinism is the view that all events are fixed")
        );
    }

    #[test]
    fn lookup_title_caps_sentence_at_200_chars() {
        let long = "x".repeat(500);
        let result = SearchResult {
            snippet: Some(long),
            ..Default::default()
        };
        assert_eq!(result.lookup_title().unwrap().chars().count(), 200);
    }

    #[test]
    fn lookup_title_none_when_everything_empty() {
        assert_eq!(SearchResult::default().lookup_title(), None);
    }

    #[test]
    fn search_result_ignores_unknown_fields() {
        let raw = r#"{"title": "T", "score": 0.93, "raw_content": null}"#;
        let result: SearchResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.title.as_deref(), Some("T"));
    }
}
