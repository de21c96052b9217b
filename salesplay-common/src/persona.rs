//! Persona profile
//!
//! A persona is the static scripted character driving the roleplay: which
//! marker phrases count as each behavioral signal, the canned replies for
//! each outcome, and the feedback text bank.
//!
//! Profiles are plain `'static` data. [`ISABELLE`] is the only persona the
//! service ships.

/// Behavioral signal detected in a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Open-ended questions
    Open,
    /// Acknowledging the customer's feelings or concerns
    Empathy,
    /// Inviting the customer to try the product
    Demo,
    /// High-pressure closing language
    Pushy,
}

impl Signal {
    pub const ALL: [Signal; 4] = [Signal::Open, Signal::Empathy, Signal::Demo, Signal::Pushy];

    pub fn polarity(&self) -> Polarity {
        match self {
            Signal::Pushy => Polarity::Negative,
            _ => Polarity::Positive,
        }
    }
}

/// Whether a signal is desirable trainee behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Named set of marker phrases
///
/// Markers must be lowercase; they are matched as plain substrings of the
/// lowercased transcript, so `"how"` also fires inside `"show"`.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyCategory {
    pub signal: Signal,
    pub markers: &'static [&'static str],
}

impl VocabularyCategory {
    /// True if any marker occurs in `normalized` (already lowercased)
    pub fn is_present_in(&self, normalized: &str) -> bool {
        self.markers.iter().any(|marker| normalized.contains(marker))
    }
}

/// Vocabulary for all four signals
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub open: VocabularyCategory,
    pub empathy: VocabularyCategory,
    pub demo: VocabularyCategory,
    pub pushy: VocabularyCategory,
}

impl Vocabulary {
    pub fn category(&self, signal: Signal) -> &VocabularyCategory {
        match signal {
            Signal::Open => &self.open,
            Signal::Empathy => &self.empathy,
            Signal::Demo => &self.demo,
            Signal::Pushy => &self.pushy,
        }
    }
}

/// Canned reply for each roleplay outcome
#[derive(Debug, Clone, Copy)]
pub struct Responses {
    pub neutral: &'static str,
    pub engaged: &'static str,
    pub decline: &'static str,
    pub buy: &'static str,
}

/// Suggestion text emitted when a signal calls for coaching
///
/// Positive signals are coached when absent; the negative signal when present.
#[derive(Debug, Clone, Copy)]
pub struct CoachingLines {
    pub open: &'static str,
    pub empathy: &'static str,
    pub demo: &'static str,
    pub pushy: &'static str,
}

impl CoachingLines {
    pub fn for_signal(&self, signal: Signal) -> &'static str {
        match signal {
            Signal::Open => self.open,
            Signal::Empathy => self.empathy,
            Signal::Demo => self.demo,
            Signal::Pushy => self.pushy,
        }
    }
}

/// Post-session feedback text bank
#[derive(Debug, Clone, Copy)]
pub struct FeedbackBank {
    /// Strength statements, reported in order
    pub good: &'static [&'static str],
    /// Fallback suggestions when no coaching line fires
    pub improve: &'static [&'static str],
    pub coaching: CoachingLines,
}

/// Static persona definition
#[derive(Debug, Clone, Copy)]
pub struct PersonaProfile {
    pub name: &'static str,
    pub vocabulary: Vocabulary,
    pub responses: Responses,
    pub feedback: FeedbackBank,
}

/// Isabelle Vidal, a discerning fountain-pen customer
pub static ISABELLE: PersonaProfile = PersonaProfile {
    name: "Isabelle Vidal",
    vocabulary: Vocabulary {
        open: VocabularyCategory {
            signal: Signal::Open,
            markers: &[
                "how",
                "what",
                "why",
                "tell me",
                "walk me through",
                "help me understand",
                "could you share",
            ],
        },
        empathy: VocabularyCategory {
            signal: Signal::Empathy,
            markers: &[
                "i understand",
                "that makes sense",
                "fair point",
                "i appreciate",
                "thanks for sharing",
                "important to you",
            ],
        },
        demo: VocabularyCategory {
            signal: Signal::Demo,
            markers: &[
                "try",
                "test",
                "write with",
                "feel the weight",
                "sample",
                "would you like to",
            ],
        },
        pushy: VocabularyCategory {
            signal: Signal::Pushy,
            markers: &[
                "buy now",
                "sign today",
                "last chance",
                "limited time",
                "must",
                "guaranteed",
                "only today",
                "best price if",
            ],
        },
    },
    responses: Responses {
        neutral: "I’m curious—what do you usually look for in a writing instrument?",
        engaged: "Oh, that feels lovely—very smooth. I do care about balance and presentation.",
        decline: "Thank you for your time. I think I’ll pass for now.",
        buy: "Yes, I’ll take it.",
    },
    feedback: FeedbackBank {
        good: &[
            "You asked thoughtful, open questions.",
            "You invited me to try the pen—great move.",
            "You acknowledged my concerns before answering.",
        ],
        improve: &[
            "Slow down before discussing price—let me connect emotionally first.",
            "Summarize my needs back before proposing a model.",
            "Avoid pushy phrases; keep it consultative.",
        ],
        coaching: CoachingLines {
            open: "Ask more open-ended questions.",
            empathy: "Acknowledge feelings/concerns first.",
            demo: "Invite the customer to try the pen.",
            pushy: "Avoid pushy phrases—stay consultative.",
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_lowercase() {
        for signal in Signal::ALL {
            for marker in ISABELLE.vocabulary.category(signal).markers {
                assert_eq!(*marker, marker.to_lowercase(), "marker {marker:?} must be lowercase");
            }
        }
    }

    #[test]
    fn test_category_lookup_matches_signal() {
        for signal in Signal::ALL {
            assert_eq!(ISABELLE.vocabulary.category(signal).signal, signal);
        }
    }

    #[test]
    fn test_substring_match_ignores_word_boundaries() {
        let open = ISABELLE.vocabulary.category(Signal::Open);
        assert!(open.is_present_in("let me show you"));
        assert!(!open.is_present_in("good morning"));
    }

    #[test]
    fn test_only_pushy_is_negative() {
        assert_eq!(Signal::Pushy.polarity(), Polarity::Negative);
        assert_eq!(Signal::Open.polarity(), Polarity::Positive);
        assert_eq!(Signal::Empathy.polarity(), Polarity::Positive);
        assert_eq!(Signal::Demo.polarity(), Polarity::Positive);
    }

    #[test]
    fn test_feedback_bank_has_three_strengths() {
        assert!(ISABELLE.feedback.good.len() >= 3);
        assert!(!ISABELLE.feedback.improve.is_empty());
    }
}
