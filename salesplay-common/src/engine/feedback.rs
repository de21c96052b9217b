//! Post-session feedback
//!
//! Strengths are always the leading entries of the persona's `good` list;
//! they do not depend on the transcript. Suggestions are one coaching line
//! per signal that calls for it, in signal order, falling back to the
//! persona's full `improve` list when nothing fired.

use serde::Serialize;

use super::analyzer::SignalVector;
use crate::persona::{PersonaProfile, Signal};

/// Number of strength statements reported
pub const STRENGTH_COUNT: usize = 3;

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    /// Persona display name
    pub persona: String,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Build the feedback report for a signal vector
pub fn generate_feedback(persona: &PersonaProfile, signals: &SignalVector) -> FeedbackRecord {
    let bank = &persona.feedback;

    let strengths = bank
        .good
        .iter()
        .take(STRENGTH_COUNT)
        .map(|s| s.to_string())
        .collect();

    let mut suggestions: Vec<String> = Signal::ALL
        .iter()
        .filter(|signal| signals.needs_coaching(**signal))
        .map(|signal| bank.coaching.for_signal(*signal).to_string())
        .collect();

    if suggestions.is_empty() {
        suggestions = bank.improve.iter().map(|s| s.to_string()).collect();
    }

    FeedbackRecord {
        persona: persona.name.to_string(),
        strengths,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::ISABELLE;

    #[test]
    fn test_strengths_are_static() {
        let quiet = generate_feedback(&ISABELLE, &SignalVector::default());
        let busy = generate_feedback(
            &ISABELLE,
            &SignalVector { open: true, empathy: true, demo: true, pushy: true },
        );

        assert_eq!(quiet.strengths.len(), STRENGTH_COUNT);
        assert_eq!(quiet.strengths, busy.strengths);
        assert_eq!(quiet.strengths[0], "You asked thoughtful, open questions.");
    }

    #[test]
    fn test_empty_signals_get_every_positive_suggestion() {
        let record = generate_feedback(&ISABELLE, &SignalVector::default());
        assert_eq!(
            record.suggestions,
            vec![
                "Ask more open-ended questions.",
                "Acknowledge feelings/concerns first.",
                "Invite the customer to try the pen.",
            ]
        );
    }

    #[test]
    fn test_pushy_suggestion_is_last() {
        let record = generate_feedback(
            &ISABELLE,
            &SignalVector { open: false, empathy: true, demo: true, pushy: true },
        );
        assert_eq!(
            record.suggestions,
            vec!["Ask more open-ended questions.", "Avoid pushy phrases—stay consultative."]
        );
    }

    #[test]
    fn test_clean_transcript_falls_back_to_improve_list() {
        let record = generate_feedback(
            &ISABELLE,
            &SignalVector { open: true, empathy: true, demo: true, pushy: false },
        );
        let expected: Vec<String> = ISABELLE.feedback.improve.iter().map(|s| s.to_string()).collect();
        assert_eq!(record.suggestions, expected);
    }

    #[test]
    fn test_persona_name_reported() {
        let record = generate_feedback(&ISABELLE, &SignalVector::default());
        assert_eq!(record.persona, "Isabelle Vidal");
    }
}
