//! Generated philosopher personas

use serde::{Deserialize, Serialize};

/// A philosopher profile with their stance and arguments.
///
/// Created once per debate by persona generation; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhilosopherProfile {
    /// Philosopher name (historical where possible)
    pub name: String,
    /// Philosophical school or tradition
    pub school: String,
    /// Position taken in this debate
    pub stance: String,
    /// Core claims the philosopher will defend
    pub core_claims: Vec<String>,
    /// How the philosopher argues (e.g. "socratic questioning")
    pub argumentative_style: String,
    /// What the philosopher is trying to achieve in the debate
    pub primary_goal: String,
}

impl PhilosopherProfile {
    /// True when every identity field is populated.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.school.trim().is_empty()
            && !self.stance.trim().is_empty()
            && !self.core_claims.is_empty()
            && !self.argumentative_style.trim().is_empty()
            && !self.primary_goal.trim().is_empty()
    }
}

/// A pair of opposing philosophers for one debate topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhilosopherSet {
    /// The topic as the model restated it
    pub topic: String,
    /// The strongest opposing position the model identified
    pub opposing_topic: String,
    /// The debaters, one per side, in speaking order
    pub philosophers: Vec<PhilosopherProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> PhilosopherProfile {
        PhilosopherProfile {
            name: name.to_string(),
            school: "Stoicism".to_string(),
            stance: "Virtue is sufficient for happiness".to_string(),
            core_claims: vec!["Externals are indifferent".to_string()],
            argumentative_style: "calm dialectic".to_string(),
            primary_goal: "show the opponent's dependence on fortune".to_string(),
        }
    }

    #[test]
    fn complete_profile_passes() {
        assert!(profile("Epictetus").is_complete());
    }

    #[test]
    fn blank_field_fails() {
        let mut p = profile("Epictetus");
        p.stance = "   ".to_string();
        assert!(!p.is_complete());

        let mut p = profile("Epictetus");
        p.core_claims.clear();
        assert!(!p.is_complete());
    }
}
