//! Quiz session state
//!
//! Holds the ordered steps, the user's selections, and local grading. A
//! failed grade never mutates the session; the user changes selections and
//! grades again.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One selectable candidate word within a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Index of the word within the word list
    pub index: usize,

    /// The word itself
    pub word: String,
}

impl QuizOption {
    pub fn new(index: usize, word: String) -> Self {
        Self { index, word }
    }
}

/// A single multiple-choice step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizStep {
    options: Vec<QuizOption>,
    // word-list index of the true word
    correct_index: usize,
    selected: Option<usize>,
}

impl QuizStep {
    pub(crate) fn new(options: Vec<QuizOption>, correct_index: usize) -> Self {
        Self {
            options,
            correct_index,
            selected: None,
        }
    }

    /// The candidates in presentation order
    pub fn options(&self) -> &[QuizOption] {
        &self.options
    }

    /// Position of the true word among the presented options
    pub fn correct_position(&self) -> usize {
        self.options
            .iter()
            .position(|o| o.index == self.correct_index)
            .unwrap_or(0)
    }

    /// The true word for this step
    pub fn correct_word(&self) -> &str {
        &self.options[self.correct_position()].word
    }

    /// The currently selected option position, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected word, if any
    pub fn selected_word(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].word.as_str())
    }
}

/// The ordered sequence of quiz steps for one verification attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    steps: Vec<QuizStep>,
}

impl QuizSession {
    pub(crate) fn new(steps: Vec<QuizStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[QuizStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&QuizStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Record the chosen option for a step, overwriting any prior choice
    pub fn select(&mut self, step_index: usize, option_index: usize) -> Result<()> {
        let len = self.steps.len();
        let step = self.steps.get_mut(step_index).ok_or(Error::StepOutOfRange {
            index: step_index,
            len,
        })?;

        if option_index >= step.options.len() {
            return Err(Error::OptionOutOfRange(option_index));
        }

        step.selected = Some(option_index);
        Ok(())
    }

    /// Number of steps with a recorded selection
    pub fn selected_count(&self) -> usize {
        self.steps.iter().filter(|s| s.selected.is_some()).count()
    }

    /// True once every step has a selection; the submit control's enable
    /// signal
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|s| s.selected.is_some())
    }

    /// Join the selected words into the mnemonic the engine verifies
    pub fn assembled_phrase(&self) -> Result<String> {
        let mut words = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            words.push(step.selected_word().ok_or(Error::IncompleteSession)?);
        }

        Ok(words.join(" "))
    }

    /// Compare the selections word-for-word, in order, against the true
    /// phrase
    pub fn grade(&self, phrase: &[String]) -> Result<()> {
        if !self.is_complete() {
            return Err(Error::IncompleteSession);
        }

        if self.steps.len() != phrase.len() {
            return Err(Error::VerificationFailed);
        }

        for (step, word) in self.steps.iter().zip(phrase) {
            if step.selected_word() != Some(word.as_str()) {
                return Err(Error::VerificationFailed);
            }
        }

        Ok(())
    }
}
