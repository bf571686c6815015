//! Error types for the wallet presentation core

use thiserror::Error;

/// Result type alias using our custom Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the wallet presentation core
#[derive(Error, Debug)]
pub enum Error {
    // Quiz construction errors
    #[error("Seed word not found in word list: {0}")]
    WordNotFound(String),

    #[error("Duplicate word in word list: {0}")]
    DuplicateWord(String),

    #[error("Word list has {0} words, at least 3 are required")]
    WordListTooSmall(usize),

    #[error("Recovery phrase is empty")]
    EmptyPhrase,

    // Quiz session errors
    #[error("Step index {index} out of range for {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    #[error("Option index {0} out of range")]
    OptionOutOfRange(usize),

    #[error("Not every step has a selection")]
    IncompleteSession,

    // Verification errors
    #[error("Seed verification failed")]
    VerificationFailed,

    // Wallet engine errors
    #[error("Wallet not found: {0}")]
    WalletNotFound(i64),

    #[error("Wallet {0} has no seed available")]
    SeedUnavailable(i64),

    #[error("Wallet engine error: {0}")]
    Engine(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Check if this error is the routine wrong-answer path the user can
    /// retry from
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::VerificationFailed)
    }

    /// Check if this error signals a corrupted phrase/word-list pairing
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Error::WordNotFound(_) | Error::DuplicateWord(_) | Error::WordListTooSmall(_)
        )
    }
}

// Conversion from I/O errors
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

// Conversion from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
