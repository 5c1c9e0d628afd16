//! # Agora Debate
//!
//! The debate pipeline: topic in, rendered dialogue out.
//!
//! Stages, in order:
//!
//! - [`PersonaGenerator`] — one LLM call turns a topic into two opposing
//!   philosopher profiles (malformed output is fatal for the request)
//! - [`EvidenceGatherer`] — one search per profile plus one encyclopedia
//!   lookup per result; failures shrink the evidence, never the debate
//! - [`TurnSequencer`] — a fixed number of alternating turns, one LLM call
//!   per philosopher per round; a malformed turn degrades to a placeholder
//! - [`transcript::render_dialogue`] — pure rendering of the turn history
//!
//! [`DebatePipeline`] composes the stages over a single
//! [`agora_core::DebateSession`] value.
//!
//! ```rust
//! use std::sync::Arc;
//! use agora_debate::{DebateConfig, DebatePipeline};
//! use agora_llm::MockProvider;
//! use agora_retrieval::{StaticSearch, StaticSummaries};
//!
//! # fn scripted_debate() -> MockProvider {
//! #     MockProvider::scripted([
//! #         r#"{"topic": "T", "opposing_topic": "O", "philosophers": [
//! #             {"name": "A", "school": "S1", "stance": "s", "core_claims": ["c"],
//! #              "argumentative_style": "st", "primary_goal": "g"},
//! #             {"name": "B", "school": "S2", "stance": "s", "core_claims": ["c"],
//! #              "argumentative_style": "st", "primary_goal": "g"}]}"#,
//! #         r#"{"speaker": "A", "argument": "arg", "question": "q?"}"#,
//! #         r#"{"speaker": "B", "argument": "arg", "question": "q?"}"#,
//! #     ])
//! # }
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = DebatePipeline::new(
//!         Arc::new(scripted_debate()),
//!         Arc::new(StaticSearch::with_titles(&["Stoicism"])),
//!         Arc::new(StaticSummaries),
//!         DebateConfig::default().with_rounds(1),
//!     );
//!     let dialogue = pipeline.dialogue("Free Will").await.unwrap();
//!     assert!(dialogue.contains("Question:"));
//! }
//! ```

pub mod config;
pub mod error;
pub mod gather;
pub mod persona;
pub mod pipeline;
pub mod prompts;
pub mod sequencer;
pub mod transcript;

pub use config::DebateConfig;
pub use error::DebateError;
pub use gather::EvidenceGatherer;
pub use persona::PersonaGenerator;
pub use pipeline::DebatePipeline;
pub use sequencer::TurnSequencer;
pub use transcript::{render_dialogue, TURN_SEPARATOR};
