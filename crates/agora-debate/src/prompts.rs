//! Prompt templates for persona generation and debate turns

use agora_core::PhilosopherProfile;

/// System role for persona generation.
pub const PERSONA_SYSTEM: &str = "You are a philosophy professor.";

/// User prompt asking for two opposing philosopher profiles.
pub fn persona_prompt(topic: &str) -> String {
    format!(
        r#"Given a philosophical concept, do the following:
1. Identify its strongest opposing philosophical position.
2. Create two philosopher profiles:
   - One defending the original concept
   - One defending the opposing concept

Use historical realism when possible.

Concept: {topic}

IMPORTANT: Respond ONLY with a valid JSON object. Do NOT use any tools. The JSON must have this exact structure:
{{
  "topic": "...",
  "opposing_topic": "...",
  "philosophers": [
    {{"name": "...", "school": "...", "stance": "...", "core_claims": [...], "argumentative_style": "...", "primary_goal": "..."}},
    {{"name": "...", "school": "...", "stance": "...", "core_claims": [...], "argumentative_style": "...", "primary_goal": "..."}}
  ]
}}"#
    )
}

/// System role putting the model in character for one turn.
pub fn debate_system(profile: &PhilosopherProfile) -> String {
    format!(
        "You are {}, a philosopher from the {} tradition.",
        profile.name, profile.school
    )
}

/// User prompt for one debate turn.
pub fn debate_prompt(profile: &PhilosopherProfile, last_argument: &str, sources: &str) -> String {
    let claims = profile
        .core_claims
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Your task:
- Respond directly to the previous philosopher's question or argument
- Defend your philosophical position
- Challenge the opponent's reasoning
- End with a probing philosophical question for them

Your stance: {stance}
Your core claims:
{claims}
Your argumentative style: {style}
Your primary goal: {goal}

Opponent's last argument:
{last_argument}

Your sources:
{sources}

IMPORTANT: Respond ONLY with a valid JSON object. Do NOT use any tools. The JSON must have this exact structure:
{{
  "speaker": "{name}",
  "argument": "...",
  "question": "..."
}}"#,
        stance = profile.stance,
        claims = claims,
        style = profile.argumentative_style,
        goal = profile.primary_goal,
        last_argument = last_argument,
        sources = sources,
        name = profile.name,
    )
}
