//! # Salesplay Common Library
//!
//! Shared code for the sales roleplay services:
//! - Persona profile (vocabulary, canned responses, feedback bank)
//! - Transcript model
//! - Scoring engine (signal analysis, reply selection, feedback)
//! - Configuration loading
//! - Error types

pub mod config;
pub mod engine;
pub mod error;
pub mod persona;
pub mod transcript;

pub use engine::{Engine, FeedbackRecord, PersonaReply, ReplyOutcome, SignalVector};
pub use error::{Error, Result};
pub use persona::PersonaProfile;
pub use transcript::{Transcript, Turn};
