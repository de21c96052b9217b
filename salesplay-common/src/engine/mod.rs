//! Conversation scoring engine
//!
//! Pure, synchronous and stateless. An [`Engine`] only borrows a `'static`
//! persona, so it is `Copy` and can be shared freely across request tasks.
//!
//! ```
//! use salesplay_common::{Engine, Transcript};
//!
//! let engine = Engine::default();
//! let transcript: Transcript = ["Tell me what you look for", "I understand"]
//!     .into_iter()
//!     .collect();
//! assert_eq!(engine.compute_reply(&transcript), engine.persona().responses.engaged);
//! ```

pub mod analyzer;
pub mod feedback;
pub mod reply;

pub use analyzer::{analyze, SignalVector};
pub use feedback::{generate_feedback, FeedbackRecord};
pub use reply::{select_outcome, select_reply, ReplyOutcome};

use crate::persona::{PersonaProfile, ISABELLE};
use crate::transcript::Transcript;

/// Reply chosen for a transcript, with the evidence behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaReply {
    pub signals: SignalVector,
    pub outcome: ReplyOutcome,
    pub text: &'static str,
}

/// Facade over analysis, reply selection and feedback for one persona
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    persona: &'static PersonaProfile,
}

impl Engine {
    pub fn new(persona: &'static PersonaProfile) -> Self {
        Self { persona }
    }

    pub fn persona(&self) -> &'static PersonaProfile {
        self.persona
    }

    pub fn analyze(&self, transcript: &Transcript) -> SignalVector {
        analyze(self.persona, transcript)
    }

    pub fn compute_outcome(&self, transcript: &Transcript) -> ReplyOutcome {
        select_outcome(&self.analyze(transcript))
    }

    /// Analyze and select in one pass
    pub fn reply(&self, transcript: &Transcript) -> PersonaReply {
        let signals = self.analyze(transcript);
        let outcome = select_outcome(&signals);
        PersonaReply {
            signals,
            outcome,
            text: self.persona.responses.for_outcome(outcome),
        }
    }

    /// Persona reply for the transcript so far; never empty
    pub fn compute_reply(&self, transcript: &Transcript) -> String {
        self.reply(transcript).text.to_string()
    }

    /// End-of-session report for the transcript
    pub fn compute_feedback(&self, transcript: &Transcript) -> FeedbackRecord {
        generate_feedback(self.persona, &self.analyze(transcript))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&ISABELLE)
    }
}
