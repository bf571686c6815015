//! Seed verification quiz
//!
//! Builds the multiple-choice steps a backup verification screen presents:
//! one step per word of the wallet's recovery phrase, each offering the true
//! word alongside two random distractors drawn from the word list.
//!
//! # Architecture
//!
//! ```text
//! Wordlist + true phrase → QuizBuilder → QuizSession → grade → engine.verify_seed
//! ```
//!
//! The session only grades locally; the engine's own seed check stays
//! authoritative (see [`crate::verify`]).

pub mod builder;
pub mod session;

pub use builder::QuizBuilder;
pub use session::{QuizOption, QuizSession, QuizStep};

/// Options presented per step: the true word plus two distractors
pub const OPTIONS_PER_STEP: usize = 3;
