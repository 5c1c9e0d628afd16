//! A single debate turn

use serde::{Deserialize, Serialize};

/// One philosopher's contribution within a round: an argument plus the
/// closing question handed to the opponent.
///
/// Fields default to empty so a partially-shaped model reply still decodes;
/// the renderer substitutes "Unknown" for a missing speaker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DebateTurn {
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub argument: String,
    #[serde(default)]
    pub question: String,
}

impl DebateTurn {
    pub fn new(speaker: &str, argument: &str, question: &str) -> Self {
        Self {
            speaker: speaker.to_string(),
            argument: argument.to_string(),
            question: question.to_string(),
        }
    }
}
