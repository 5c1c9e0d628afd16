//! Mock LLM provider for testing

use async_trait::async_trait;
use std::time::Instant;

use crate::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};

/// A mock LLM provider that returns predefined responses.
///
/// With canned responses it cycles through them, which is enough to script a
/// whole debate: one persona reply followed by alternating turn replies.
/// With no canned responses it answers from the prompt shape instead, so a
/// keyless deployment can still produce a demo debate.
#[derive(Debug)]
pub struct MockProvider {
    /// Name of this mock
    pub name: String,
    /// Canned responses (cycles through them)
    responses: Vec<String>,
    /// Current response index
    index: std::sync::atomic::AtomicUsize,
}

impl MockProvider {
    /// Create a new mock provider with given responses
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            name: "mock".to_string(),
            responses,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a mock that always returns the same response
    pub fn constant(response: &str) -> Self {
        Self::new(vec![response.to_string()])
    }

    /// Create a mock from a script of replies, consumed in order
    pub fn scripted<S: Into<String>>(responses: impl IntoIterator<Item = S>) -> Self {
        Self::new(responses.into_iter().map(Into::into).collect())
    }

    /// Create a smart mock that responds based on prompt content
    pub fn smart() -> Self {
        Self {
            name: "smart-mock".to_string(),
            responses: vec![],
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of completions served so far
    pub fn calls(&self) -> usize {
        self.index.load(std::sync::atomic::Ordering::Relaxed)
    }

    fn generate_smart_response(&self, request: &LlmRequest) -> String {
        // Persona prompts spell out the expected set shape
        if request.prompt.contains("\"opposing_topic\"") {
            return r#"{
  "topic": "The mocked topic",
  "opposing_topic": "The opposing view",
  "philosophers": [
    {"name": "Mock the Elder", "school": "Mockery",
     "stance": "All replies are canned", "core_claims": ["No key, no model"],
     "argumentative_style": "deadpan", "primary_goal": "stand in for a real provider"},
    {"name": "Mock the Younger", "school": "Counter-Mockery",
     "stance": "Even canned replies teach", "core_claims": ["Shape over substance"],
     "argumentative_style": "earnest", "primary_goal": "keep the pipeline honest"}
  ]
}"#
            .to_string();
        }

        // Turn prompts put the model in character via the system role:
        // "You are {name}, a philosopher from the {school} tradition."
        let speaker = request
            .system
            .strip_prefix("You are ")
            .and_then(|rest| rest.split(',').next())
            .unwrap_or("Mock");
        format!(
            r#"{{"speaker": "{speaker}", "argument": "This is a mocked reply; set GROQ_API_KEY for a real debate.", "question": "Shall we continue?"}}"#
        )
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        true // Mock is always available
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = Instant::now();

        let content = if self.responses.is_empty() {
            self.generate_smart_response(&request)
        } else {
            // Cycle through canned responses
            let idx = self
                .index
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            self.responses[idx % self.responses.len()].clone()
        };

        Ok(LlmResponse {
            content,
            model: self.name.clone(),
            tokens_used: Some((request.prompt.len() / 4) as u32 + 100),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider() {
        let mock = MockProvider::constant("Hello, world!");
        let response = mock.ask("test").await.unwrap();
        assert_eq!(response, "Hello, world!");
    }

    #[tokio::test]
    async fn scripted_mock_cycles() {
        let mock = MockProvider::scripted(["a", "b"]);
        assert_eq!(mock.ask("1").await.unwrap(), "a");
        assert_eq!(mock.ask("2").await.unwrap(), "b");
        assert_eq!(mock.ask("3").await.unwrap(), "a");
        assert_eq!(mock.calls(), 3);
    }

    #[tokio::test]
    async fn smart_mock_answers_persona_prompts_with_a_set() {
        let mock = MockProvider::smart();
        let reply = mock
            .ask("Emit JSON with \"opposing_topic\" and two profiles")
            .await
            .unwrap();
        assert!(reply.contains("\"philosophers\""));
    }

    #[tokio::test]
    async fn smart_mock_speaks_in_character() {
        let mock = MockProvider::smart();
        let request = LlmRequest::with_role(
            "You are Epictetus, a philosopher from the Stoic tradition.",
            "Respond with a JSON turn",
        );
        let response = mock.complete(request).await.unwrap();
        assert!(response.content.contains("\"speaker\": \"Epictetus\""));
    }
}
