//! Per-request debate session state

use serde::{Deserialize, Serialize};

use crate::evidence::SourcedPhilosopher;
use crate::profile::PhilosopherSet;
use crate::turn::DebateTurn;

/// State for one debate request.
///
/// Constructed once per request and transformed by each pipeline stage via
/// explicit field updates; discarded after the transcript is rendered.
/// Nothing is shared between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateSession {
    /// The (defaulted) topic this session debates
    pub topic: String,
    /// Set by persona generation
    pub philosophers: Option<PhilosopherSet>,
    /// Set by evidence gathering, in speaking order
    pub participants: Vec<SourcedPhilosopher>,
    /// Append-only turn history in generation order
    pub history: Vec<DebateTurn>,
    /// Full passes completed over all participants
    pub rounds_completed: u32,
    /// Set by transcript rendering
    pub dialogue: Option<String>,
}

impl DebateSession {
    /// Start a fresh session for a topic.
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            philosophers: None,
            participants: Vec::new(),
            history: Vec::new(),
            rounds_completed: 0,
            dialogue: None,
        }
    }

    /// Number of turns generated so far.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_empty() {
        let session = DebateSession::new("Free Will");
        assert_eq!(session.topic, "Free Will");
        assert!(session.philosophers.is_none());
        assert_eq!(session.turn_count(), 0);
        assert_eq!(session.rounds_completed, 0);
        assert!(session.dialogue.is_none());
    }
}
