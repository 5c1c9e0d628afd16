//! Tolerant decoding of structured model replies
//!
//! Models asked for "JSON only" still wrap objects in prose or code fences
//! often enough that a direct decode is not sufficient. The policy here:
//! try the raw text, then the first-`{`-to-last-`}` substring, then give up
//! with a typed error carrying an excerpt for diagnostics.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// How much of a malformed reply to keep for diagnostics.
const EXCERPT_CHARS: usize = 200;

/// Decoding a model reply failed at every stage.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no JSON object found in reply: {excerpt}")]
    NoObject { excerpt: String },
    #[error("reply is not valid JSON for the expected shape: {source} (excerpt: {excerpt})")]
    Invalid {
        #[source]
        source: serde_json::Error,
        excerpt: String,
    },
}

impl DecodeError {
    /// The reply excerpt captured for diagnostics.
    pub fn excerpt(&self) -> &str {
        match self {
            DecodeError::NoObject { excerpt } => excerpt,
            DecodeError::Invalid { excerpt, .. } => excerpt,
        }
    }
}

/// Decode `text` into `T`, tolerating prose around the JSON object.
pub fn from_relaxed_json<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    match serde_json::from_str::<T>(text) {
        Ok(value) => return Ok(value),
        Err(err) => {
            tracing::debug!(error = %err, "direct decode failed, trying brace extraction");
        }
    }

    let Some(object) = extract_brace_object(text) else {
        return Err(DecodeError::NoObject {
            excerpt: excerpt(text),
        });
    };

    serde_json::from_str::<T>(object).map_err(|source| DecodeError::Invalid {
        source,
        excerpt: excerpt(text),
    })
}

/// The substring from the first `{` to the last `}`, when both exist.
fn extract_brace_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// First [`EXCERPT_CHARS`] characters of the reply.
pub fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::DebateTurn;

    #[test]
    fn decodes_clean_json() {
        let turn: DebateTurn = from_relaxed_json(
            r#"{"speaker": "Kant", "argument": "Duty binds.", "question": "And you?"}"#,
        )
        .unwrap();
        assert_eq!(turn.speaker, "Kant");
    }

    #[test]
    fn decodes_json_wrapped_in_prose() {
        let text = "Sure! Here is the JSON you asked for:\n```json\n\
                    {\"speaker\": \"Mill\", \"argument\": \"Utility.\", \"question\": \"Why not?\"}\n\
                    ```\nHope that helps.";
        let turn: DebateTurn = from_relaxed_json(text).unwrap();
        assert_eq!(turn.speaker, "Mill");
        assert_eq!(turn.question, "Why not?");
    }

    #[test]
    fn no_object_reports_excerpt() {
        let err = from_relaxed_json::<DebateTurn>("not json at all").unwrap_err();
        match err {
            DecodeError::NoObject { excerpt } => assert_eq!(excerpt, "not json at all"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn excerpt_is_capped() {
        let long = "y".repeat(1000);
        let err = from_relaxed_json::<DebateTurn>(&long).unwrap_err();
        assert_eq!(err.excerpt().chars().count(), EXCERPT_CHARS);
    }

    #[test]
    fn garbage_braces_report_invalid() {
        let err = from_relaxed_json::<DebateTurn>("prefix { this is not json } suffix").unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { .. }));
    }

    #[test]
    fn reversed_braces_count_as_no_object() {
        let err = from_relaxed_json::<DebateTurn>("} nothing here {").unwrap_err();
        assert!(matches!(err, DecodeError::NoObject { .. }));
    }
}
