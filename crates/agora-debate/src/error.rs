//! Debate pipeline errors

use agora_llm::LlmError;
use thiserror::Error;

/// Errors that abort a debate request.
///
/// Only two things can: persona generation returning content that cannot be
/// decoded into two usable profiles, and the LLM transport failing past its
/// retry ceiling. Search and encyclopedia failures degrade silently, and a
/// malformed individual turn becomes a placeholder instead of an error.
#[derive(Debug, Error)]
pub enum DebateError {
    #[error("persona generation produced unusable content ({reason}); excerpt: {excerpt}")]
    PersonaFormat { reason: String, excerpt: String },

    #[error(transparent)]
    Llm(#[from] LlmError),
}
