//! Pipeline composition over one session value

use std::sync::Arc;

use agora_core::DebateSession;
use agora_llm::LlmProvider;
use agora_retrieval::{SearchProvider, SummaryProvider};

use crate::config::DebateConfig;
use crate::error::DebateError;
use crate::gather::EvidenceGatherer;
use crate::persona::PersonaGenerator;
use crate::sequencer::TurnSequencer;
use crate::transcript::render_dialogue;

/// The full debate pipeline: personas → evidence → turns → transcript.
///
/// One instance serves many requests; each request gets its own
/// [`DebateSession`] threaded linearly through the stages.
#[derive(Debug, Clone)]
pub struct DebatePipeline {
    persona: PersonaGenerator,
    gatherer: EvidenceGatherer,
    sequencer: TurnSequencer,
    config: DebateConfig,
}

impl DebatePipeline {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        search: Arc<dyn SearchProvider>,
        encyclopedia: Arc<dyn SummaryProvider>,
        config: DebateConfig,
    ) -> Self {
        Self {
            persona: PersonaGenerator::new(llm.clone()),
            gatherer: EvidenceGatherer::new(search, encyclopedia, config.search_results),
            sequencer: TurnSequencer::new(llm, config.rounds, config.prompt_sources),
            config,
        }
    }

    /// Run a full debate, returning the completed session.
    pub async fn run(&self, topic: &str) -> Result<DebateSession, DebateError> {
        let topic = if topic.trim().is_empty() {
            tracing::info!(default = %self.config.default_topic, "blank topic, using default");
            self.config.default_topic.clone()
        } else {
            topic.to_string()
        };

        let mut session = DebateSession::new(&topic);

        let set = self.persona.generate(&session.topic).await?;
        session.participants = self.gatherer.gather(&set).await;
        session.philosophers = Some(set);

        session.history = self
            .sequencer
            .run(&session.topic, &session.participants)
            .await?;
        session.rounds_completed = self.config.rounds;

        session.dialogue = Some(render_dialogue(&session.history));
        tracing::info!(
            topic = %session.topic,
            turns = session.turn_count(),
            "debate complete"
        );
        Ok(session)
    }

    /// Run a full debate, returning just the rendered transcript.
    pub async fn dialogue(&self, topic: &str) -> Result<String, DebateError> {
        let session = self.run(topic).await?;
        Ok(session.dialogue.unwrap_or_default())
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &DebateConfig {
        &self.config
    }
}
