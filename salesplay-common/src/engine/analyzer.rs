//! Signal analysis
//!
//! Flattens a transcript into lowercase text and checks each vocabulary
//! category for a marker phrase. Presence checks only: turn order and
//! repetition do not change the result.

use crate::persona::{PersonaProfile, Polarity, Signal};
use crate::transcript::Transcript;

/// Presence of each behavioral signal in one transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalVector {
    pub open: bool,
    pub empathy: bool,
    pub demo: bool,
    pub pushy: bool,
}

impl SignalVector {
    pub fn get(&self, signal: Signal) -> bool {
        match signal {
            Signal::Open => self.open,
            Signal::Empathy => self.empathy,
            Signal::Demo => self.demo,
            Signal::Pushy => self.pushy,
        }
    }

    /// True when the transcript calls for coaching on `signal`
    ///
    /// Positive signals need coaching when absent, the negative one when present.
    pub fn needs_coaching(&self, signal: Signal) -> bool {
        match signal.polarity() {
            Polarity::Positive => !self.get(signal),
            Polarity::Negative => self.get(signal),
        }
    }
}

/// Analyze a transcript against a persona's vocabulary
pub fn analyze(persona: &PersonaProfile, transcript: &Transcript) -> SignalVector {
    analyze_text(persona, &transcript.joined_text())
}

/// Analyze already-flattened text; casing is normalized here
pub fn analyze_text(persona: &PersonaProfile, text: &str) -> SignalVector {
    let normalized = text.to_lowercase();
    let vocabulary = &persona.vocabulary;

    let present = |signal| vocabulary.category(signal).is_present_in(&normalized);

    SignalVector {
        open: present(Signal::Open),
        empathy: present(Signal::Empathy),
        demo: present(Signal::Demo),
        pushy: present(Signal::Pushy),
    }
}
