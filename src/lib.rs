//! Wallet UI Core Library
//!
//! Presentation-layer state models for a mobile wallet. The wallet engine
//! itself (seed generation, peer sync, transaction construction, address
//! validation) is an external native library reached through the
//! [`engine::WalletEngine`] trait.

pub mod address;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod quiz;
pub mod settings;
pub mod sync;
pub mod verify;
pub mod wordlist;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
