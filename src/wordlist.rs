//! Seed word vocabulary
//!
//! The ordered, duplicate-free dictionary that recovery phrase words and
//! quiz distractors are drawn from. Shipped as a plain text asset, one word
//! per line.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};

/// Ordered word list with distinct entries
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Create a word list, rejecting duplicate entries
    pub fn new(words: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for word in &words {
            if !seen.insert(word.as_str()) {
                return Err(Error::DuplicateWord(word.clone()));
            }
        }

        Ok(Self { words })
    }

    /// Load a word list from a text file, one word per line
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(format!("Failed to read word list {}: {}", path.display(), e))
        })?;

        let words = raw.split_whitespace().map(str::to_string).collect();
        Self::new(words)
    }

    /// Position of a word within the list
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Word at an index
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
