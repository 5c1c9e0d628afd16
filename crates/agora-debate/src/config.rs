//! Debate pipeline configuration

/// Tunables for one debate pipeline.
#[derive(Debug, Clone)]
pub struct DebateConfig {
    /// Full passes over both philosophers
    pub rounds: u32,
    /// Search results requested per philosopher
    pub search_results: usize,
    /// Evidence titles included in each turn prompt
    pub prompt_sources: usize,
    /// Topic used when the caller supplies a blank one
    pub default_topic: String,
}

impl Default for DebateConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            search_results: 5,
            prompt_sources: 3,
            default_topic: "Free Will".to_string(),
        }
    }
}

impl DebateConfig {
    /// Create from environment variables, falling back to defaults.
    ///
    /// `AGORA_ROUNDS` overrides the round ceiling.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(rounds) = std::env::var("AGORA_ROUNDS")
            .ok()
            .and_then(|r| r.parse().ok())
        {
            config.rounds = rounds;
        }
        config
    }

    /// Override the round ceiling.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}
