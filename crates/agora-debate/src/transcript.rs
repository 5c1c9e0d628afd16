//! Transcript rendering
//!
//! Pure: identical turn lists always render to byte-identical text.

use agora_core::DebateTurn;

/// Separator line between rendered turns.
pub const TURN_SEPARATOR: &str = "\n---\n";

/// Speaker shown when a turn carries none.
const UNKNOWN_SPEAKER: &str = "Unknown";

/// Render the ordered turn list into one flat dialogue block.
pub fn render_dialogue(turns: &[DebateTurn]) -> String {
    turns
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join(TURN_SEPARATOR)
}

fn render_turn(turn: &DebateTurn) -> String {
    let speaker = if turn.speaker.trim().is_empty() {
        UNKNOWN_SPEAKER
    } else {
        &turn.speaker
    };
    format!(
        "{}:\n{}\n\nQuestion:\n{}\n",
        speaker, turn.argument, turn.question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(speaker: &str, argument: &str, question: &str) -> DebateTurn {
        DebateTurn::new(speaker, argument, question)
    }

    #[test]
    fn renders_speaker_argument_question_blocks() {
        let dialogue = render_dialogue(&[
            turn("Kant", "Duty binds.", "What of consequences?"),
            turn("Mill", "Utility decides.", "What of duty?"),
        ]);
        assert_eq!(
            dialogue,
            "Kant:\nDuty binds.\n\nQuestion:\nWhat of consequences?\n\
             \n---\n\
             Mill:\nUtility decides.\n\nQuestion:\nWhat of duty?\n"
        );
    }

    #[test]
    fn n_turns_render_to_n_separated_blocks() {
        let turns: Vec<_> = (0..7).map(|i| turn(&format!("P{i}"), "a", "q")).collect();
        let dialogue = render_dialogue(&turns);
        assert_eq!(dialogue.matches(TURN_SEPARATOR).count(), 6);
    }

    #[test]
    fn rendering_is_deterministic() {
        let turns = vec![turn("Kant", "Duty binds.", "And you?")];
        assert_eq!(render_dialogue(&turns), render_dialogue(&turns));
    }

    #[test]
    fn missing_speaker_defaults_to_unknown() {
        let dialogue = render_dialogue(&[turn("  ", "argument", "question")]);
        assert!(dialogue.starts_with("Unknown:\n"));
    }

    #[test]
    fn empty_history_renders_empty() {
        assert_eq!(render_dialogue(&[]), "");
    }
}
