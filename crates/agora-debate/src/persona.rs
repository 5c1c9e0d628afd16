//! Persona generation: topic in, two opposing philosophers out

use std::sync::Arc;

use agora_core::{from_relaxed_json, PhilosopherSet};
use agora_llm::{LlmProvider, LlmRequest};

use crate::error::DebateError;
use crate::prompts::{persona_prompt, PERSONA_SYSTEM};

/// How many debaters every session has.
pub const PROFILE_COUNT: usize = 2;

/// Generates the two opposing philosopher profiles for a topic.
///
/// This is the only stage where malformed model output is fatal: there is
/// no debate to degrade into without its participants.
#[derive(Debug, Clone)]
pub struct PersonaGenerator {
    llm: Arc<dyn LlmProvider>,
}

impl PersonaGenerator {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// One LLM call, decoded and validated into a [`PhilosopherSet`].
    pub async fn generate(&self, topic: &str) -> Result<PhilosopherSet, DebateError> {
        let request = LlmRequest::with_role(PERSONA_SYSTEM, &persona_prompt(topic));
        let response = self.llm.complete(request).await?;

        let set: PhilosopherSet =
            from_relaxed_json(&response.content).map_err(|err| DebateError::PersonaFormat {
                reason: "not a philosopher set".to_string(),
                excerpt: err.excerpt().to_string(),
            })?;

        if set.philosophers.len() != PROFILE_COUNT {
            return Err(DebateError::PersonaFormat {
                reason: format!(
                    "expected {} profiles, got {}",
                    PROFILE_COUNT,
                    set.philosophers.len()
                ),
                excerpt: agora_core::decode::excerpt(&response.content),
            });
        }

        if let Some(incomplete) = set.philosophers.iter().find(|p| !p.is_complete()) {
            return Err(DebateError::PersonaFormat {
                reason: format!("profile \"{}\" has empty fields", incomplete.name),
                excerpt: agora_core::decode::excerpt(&response.content),
            });
        }

        tracing::info!(
            topic = %set.topic,
            opposing = %set.opposing_topic,
            a = %set.philosophers[0].name,
            b = %set.philosophers[1].name,
            "personas generated"
        );

        Ok(set)
    }
}
