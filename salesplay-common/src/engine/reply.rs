//! Reply selection
//!
//! Maps a [`SignalVector`] to one of the persona's canned replies through a
//! priority-ordered rule table. The first rule whose predicate holds wins;
//! when none holds the persona stays neutral.
//!
//! Pushiness is only penalized when the trainee never asked an open
//! question. A pushy-but-open transcript falls through to the positive rules.

use super::analyzer::SignalVector;
use crate::persona::{PersonaProfile, Responses};

/// Roleplay outcome chosen for a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyOutcome {
    Neutral,
    Engaged,
    Decline,
    Buy,
}

impl ReplyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyOutcome::Neutral => "neutral",
            ReplyOutcome::Engaged => "engaged",
            ReplyOutcome::Decline => "decline",
            ReplyOutcome::Buy => "buy",
        }
    }
}

impl Responses {
    pub fn for_outcome(&self, outcome: ReplyOutcome) -> &'static str {
        match outcome {
            ReplyOutcome::Neutral => self.neutral,
            ReplyOutcome::Engaged => self.engaged,
            ReplyOutcome::Decline => self.decline,
            ReplyOutcome::Buy => self.buy,
        }
    }
}

/// One entry of the decision table
#[derive(Clone, Copy)]
pub struct ReplyRule {
    pub outcome: ReplyOutcome,
    pub applies: fn(&SignalVector) -> bool,
}

/// Decision table, evaluated top-down
pub const REPLY_RULES: [ReplyRule; 3] = [
    ReplyRule {
        outcome: ReplyOutcome::Decline,
        applies: |s| s.pushy && !s.open,
    },
    ReplyRule {
        outcome: ReplyOutcome::Buy,
        applies: |s| s.open && s.empathy && s.demo,
    },
    ReplyRule {
        outcome: ReplyOutcome::Engaged,
        applies: |s| s.open && (s.empathy || s.demo),
    },
];

/// Outcome when no rule applies
pub const FALLBACK_OUTCOME: ReplyOutcome = ReplyOutcome::Neutral;

/// Choose the outcome for a signal vector
pub fn select_outcome(signals: &SignalVector) -> ReplyOutcome {
    REPLY_RULES
        .iter()
        .find(|rule| (rule.applies)(signals))
        .map(|rule| rule.outcome)
        .unwrap_or(FALLBACK_OUTCOME)
}

/// Choose the persona's reply text for a signal vector
pub fn select_reply(persona: &PersonaProfile, signals: &SignalVector) -> &'static str {
    persona.responses.for_outcome(select_outcome(signals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::ISABELLE;

    fn signals(open: bool, empathy: bool, demo: bool, pushy: bool) -> SignalVector {
        SignalVector { open, empathy, demo, pushy }
    }

    #[test]
    fn test_pushy_without_open_always_declines() {
        for empathy in [false, true] {
            for demo in [false, true] {
                assert_eq!(
                    select_outcome(&signals(false, empathy, demo, true)),
                    ReplyOutcome::Decline,
                    "empathy={empathy} demo={demo}"
                );
            }
        }
    }

    #[test]
    fn test_full_coverage_buys() {
        assert_eq!(select_outcome(&signals(true, true, true, false)), ReplyOutcome::Buy);
    }

    #[test]
    fn test_partial_coverage_engages() {
        assert_eq!(select_outcome(&signals(true, true, false, false)), ReplyOutcome::Engaged);
        assert_eq!(select_outcome(&signals(true, false, true, false)), ReplyOutcome::Engaged);
    }

    #[test]
    fn test_no_open_question_stays_neutral() {
        assert_eq!(select_outcome(&signals(false, true, true, false)), ReplyOutcome::Neutral);
        assert_eq!(select_outcome(&signals(true, false, false, false)), ReplyOutcome::Neutral);
        assert_eq!(select_outcome(&SignalVector::default()), ReplyOutcome::Neutral);
    }

    #[test]
    fn test_pushy_with_open_falls_through() {
        assert_eq!(select_outcome(&signals(true, true, true, true)), ReplyOutcome::Buy);
        assert_eq!(select_outcome(&signals(true, false, true, true)), ReplyOutcome::Engaged);
        assert_eq!(select_outcome(&signals(true, false, false, true)), ReplyOutcome::Neutral);
    }

    #[test]
    fn test_reply_text_comes_from_persona() {
        assert_eq!(
            select_reply(&ISABELLE, &signals(true, true, true, false)),
            "Yes, I’ll take it."
        );
        assert_eq!(
            select_reply(&ISABELLE, &signals(false, false, false, true)),
            ISABELLE.responses.decline
        );
    }
}
