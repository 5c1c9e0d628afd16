//! Turn sequencing: a fixed number of alternating LLM calls
//!
//! Plain bounded iteration: an outer loop over rounds, an inner loop over
//! the philosophers in speaking order. The loop terminates by counter, never
//! by content.

use std::sync::Arc;

use agora_core::{from_relaxed_json, DebateTurn, EvidenceItem, SourcedPhilosopher};
use agora_llm::{LlmProvider, LlmRequest};

use crate::error::DebateError;
use crate::prompts::{debate_prompt, debate_system};

/// Question substituted when a reply had no usable closing question.
pub const FALLBACK_QUESTION: &str = "What do you think?";

/// How much of a malformed reply survives as the placeholder argument.
const ARGUMENT_EXCERPT_CHARS: usize = 500;

/// Runs the alternating debate rounds.
#[derive(Debug, Clone)]
pub struct TurnSequencer {
    llm: Arc<dyn LlmProvider>,
    rounds: u32,
    prompt_sources: usize,
}

impl TurnSequencer {
    pub fn new(llm: Arc<dyn LlmProvider>, rounds: u32, prompt_sources: usize) -> Self {
        Self {
            llm,
            rounds,
            prompt_sources,
        }
    }

    /// Produce `rounds × participants` turns in generation order.
    ///
    /// Each turn answers the previous turn's closing question; the first
    /// turn answers the fixed seed for the topic. A reply that cannot be
    /// decoded becomes a placeholder turn, so a single malformed reply never
    /// halts the debate. Transport failures past the retry ceiling do.
    pub async fn run(
        &self,
        topic: &str,
        participants: &[SourcedPhilosopher],
    ) -> Result<Vec<DebateTurn>, DebateError> {
        let mut history: Vec<DebateTurn> = Vec::new();

        for round in 0..self.rounds {
            for sourced in participants {
                let last_argument = match history.last() {
                    Some(turn) => turn.question.clone(),
                    None => format!("Begin the debate on {topic}"),
                };
                let sources = format_sources(&sourced.sources, self.prompt_sources);

                let request = LlmRequest::with_role(
                    &debate_system(&sourced.profile),
                    &debate_prompt(&sourced.profile, &last_argument, &sources),
                );
                let response = self.llm.complete(request).await?;

                let turn = match from_relaxed_json::<DebateTurn>(&response.content) {
                    Ok(turn) => turn,
                    Err(err) => {
                        tracing::warn!(
                            round,
                            speaker = %sourced.profile.name,
                            error = %err,
                            "malformed turn reply, substituting placeholder"
                        );
                        placeholder_turn(&sourced.profile.name, &response.content)
                    }
                };
                history.push(turn);
            }
            tracing::debug!(round, turns = history.len(), "round complete");
        }

        Ok(history)
    }
}

/// The first `limit` evidence titles as a `- title` list.
fn format_sources(sources: &[EvidenceItem], limit: usize) -> String {
    sources
        .iter()
        .take(limit)
        .map(|s| format!("- {}", s.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Placeholder for a reply that could not be decoded.
fn placeholder_turn(speaker: &str, raw_reply: &str) -> DebateTurn {
    DebateTurn {
        speaker: speaker.to_string(),
        argument: raw_reply.chars().take(ARGUMENT_EXCERPT_CHARS).collect(),
        question: FALLBACK_QUESTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{PageSummary, PhilosopherProfile};
    use agora_llm::MockProvider;

    fn participant(name: &str, titles: &[&str]) -> SourcedPhilosopher {
        SourcedPhilosopher {
            profile: PhilosopherProfile {
                name: name.to_string(),
                school: "School".to_string(),
                stance: "stance".to_string(),
                core_claims: vec!["claim".to_string()],
                argumentative_style: "style".to_string(),
                primary_goal: "goal".to_string(),
            },
            sources: titles
                .iter()
                .map(|t| EvidenceItem {
                    title: t.to_string(),
                    snippet: String::new(),
                    url: None,
                    encyclopedia: Some(PageSummary {
                        title: t.to_string(),
                        summary: None,
                        url: None,
                    }),
                })
                .collect(),
        }
    }

    fn turn_reply(speaker: &str) -> String {
        format!(r#"{{"speaker": "{speaker}", "argument": "My case.", "question": "Your move?"}}"#)
    }

    #[tokio::test]
    async fn produces_two_times_rounds_turns_round_robin() {
        let llm = Arc::new(MockProvider::scripted([turn_reply("A"), turn_reply("B")]));
        let sequencer = TurnSequencer::new(llm, 5, 3);
        let participants = [participant("A", &[]), participant("B", &[])];

        let turns = sequencer.run("Free Will", &participants).await.unwrap();
        assert_eq!(turns.len(), 10);
        for (i, turn) in turns.iter().enumerate() {
            let expected = if i % 2 == 0 { "A" } else { "B" };
            assert_eq!(turn.speaker, expected);
        }
    }

    #[tokio::test]
    async fn malformed_reply_becomes_placeholder_and_debate_continues() {
        let llm = Arc::new(MockProvider::scripted([
            "not json at all".to_string(),
            turn_reply("B"),
        ]));
        let sequencer = TurnSequencer::new(llm, 2, 3);
        let participants = [participant("A", &[]), participant("B", &[])];

        let turns = sequencer.run("Free Will", &participants).await.unwrap();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].speaker, "A");
        assert_eq!(turns[0].argument, "not json at all");
        assert_eq!(turns[0].question, FALLBACK_QUESTION);
        assert_eq!(turns[1].speaker, "B");
    }

    #[tokio::test]
    async fn placeholder_argument_is_capped_at_500_chars() {
        let long_reply = "x".repeat(2000);
        let llm = Arc::new(MockProvider::constant(&long_reply));
        let sequencer = TurnSequencer::new(llm, 1, 3);
        let participants = [participant("A", &[]), participant("B", &[])];

        let turns = sequencer.run("Free Will", &participants).await.unwrap();
        assert_eq!(turns[0].argument.chars().count(), 500);
    }

    /// Mock that records every prompt it is asked.
    #[derive(Debug)]
    struct Recording {
        inner: MockProvider,
        prompts: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl agora_llm::LlmProvider for Recording {
        fn name(&self) -> &str {
            "recording"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn complete(
            &self,
            request: LlmRequest,
        ) -> Result<agora_llm::LlmResponse, agora_llm::LlmError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            self.inner.complete(request).await
        }
    }

    #[tokio::test]
    async fn threads_seed_then_previous_question() {
        let llm = Arc::new(Recording {
            inner: MockProvider::scripted([
                r#"{"speaker": "A", "argument": "a1", "question": "Q-from-A?"}"#,
                r#"{"speaker": "B", "argument": "b1", "question": "Q-from-B?"}"#,
            ]),
            prompts: std::sync::Mutex::new(Vec::new()),
        });
        let sequencer = TurnSequencer::new(llm.clone(), 1, 3);
        let participants = [participant("A", &[]), participant("B", &[])];

        sequencer.run("Free Will", &participants).await.unwrap();

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("Begin the debate on Free Will"));
        assert!(prompts[1].contains("Q-from-A?"));
    }

    #[test]
    fn sources_are_truncated_to_limit() {
        let p = participant("A", &["one", "two", "three", "four"]);
        let text = format_sources(&p.sources, 3);
        assert_eq!(text, "- one\n- two\n- three");
    }

    #[test]
    fn empty_sources_format_to_empty_text() {
        assert_eq!(format_sources(&[], 3), "");
    }
}
