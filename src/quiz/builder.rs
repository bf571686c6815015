//! Quiz construction
//!
//! Draws distractors and shuffles option order from a seedable RNG so
//! sessions can be reproduced in tests and demos.

use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::quiz::session::{QuizOption, QuizSession, QuizStep};
use crate::quiz::OPTIONS_PER_STEP;
use crate::wordlist::Wordlist;

/// Builds quiz sessions from a word list and the wallet's recovery phrase
pub struct QuizBuilder {
    rng: StdRng,
}

impl QuizBuilder {
    /// Create a new builder with an optional RNG seed
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Create a builder from entropy (random seed)
    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    /// Build one quiz step per phrase word
    ///
    /// Fails with [`Error::WordNotFound`] when a phrase word is missing from
    /// the word list; that pairing is corrupt and no session must be
    /// presented for it.
    pub fn build_session(&mut self, wordlist: &Wordlist, phrase: &[String]) -> Result<QuizSession> {
        if phrase.is_empty() {
            return Err(Error::EmptyPhrase);
        }

        if wordlist.len() < OPTIONS_PER_STEP {
            return Err(Error::WordListTooSmall(wordlist.len()));
        }

        let mut steps = Vec::with_capacity(phrase.len());
        for word in phrase {
            let true_index = wordlist
                .index_of(word)
                .ok_or_else(|| Error::WordNotFound(word.clone()))?;
            steps.push(self.build_step(wordlist, true_index));
        }

        debug!("built quiz session with {} steps", steps.len());
        Ok(QuizSession::new(steps))
    }

    /// Draw two distinct distractors from the remaining indices and shuffle
    /// them together with the true word
    fn build_step(&mut self, wordlist: &Wordlist, true_index: usize) -> QuizStep {
        let candidates: Vec<usize> = (0..wordlist.len()).filter(|&i| i != true_index).collect();
        let distractors: Vec<usize> = candidates
            .choose_multiple(&mut self.rng, OPTIONS_PER_STEP - 1)
            .copied()
            .collect();

        let mut options: Vec<QuizOption> = distractors
            .into_iter()
            .chain(std::iter::once(true_index))
            .map(|i| QuizOption::new(i, wordlist.words()[i].clone()))
            .collect();
        options.shuffle(&mut self.rng);

        QuizStep::new(options, true_index)
    }
}

impl Default for QuizBuilder {
    fn default() -> Self {
        Self::from_entropy()
    }
}
