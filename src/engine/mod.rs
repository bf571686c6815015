//! Wallet engine collaborator
//!
//! The native wallet library (key derivation, peer sync, address
//! validation, config storage) sits behind this trait. Components receive
//! an explicit engine reference; nothing in the crate reaches for a global
//! handle.
//!
//! All calls are synchronous: the presentation layer runs on a single
//! logical UI thread and treats the engine as a black box that either
//! returns or fails.

pub mod memory;

pub use memory::MemoryEngine;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Wallet identifier assigned by the engine
pub type WalletId = i64;

/// Snapshot of one wallet as reported by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSummary {
    pub id: WalletId,

    pub name: String,

    /// Height of the wallet's best known block
    pub best_block: i64,

    /// Unix timestamp of the wallet's best known block
    pub best_block_timestamp: i64,

    /// Wallet is queued behind other wallets during multi-wallet sync
    pub waiting: bool,
}

/// Headers-fetch progress reported by the engine while syncing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeadersFetchProgress {
    pub fetched_headers_count: i64,

    pub total_headers_to_fetch: i64,

    /// Unix timestamp of the most recently fetched header
    pub current_header_timestamp: i64,
}

/// Interface to the external wallet engine
pub trait WalletEngine {
    /// Ids of the currently open wallets, in display order
    fn opened_wallets(&self) -> Vec<WalletId>;

    /// Look up one wallet
    fn wallet(&self, id: WalletId) -> Result<WalletSummary>;

    /// The wallet's recovery phrase, one word per entry
    ///
    /// Only available while the seed backup is still pending verification.
    fn seed_words(&self, id: WalletId) -> Result<Vec<String>>;

    /// Authoritative seed check against the wallet's stored key material
    fn verify_seed(&self, id: WalletId, mnemonic: &str) -> Result<()>;

    /// Read a boolean config value, falling back to `default`
    fn read_bool_config(&self, key: &str, default: bool) -> bool;

    /// Persist a boolean config value
    fn set_bool_config(&self, key: &str, value: bool);

    /// Engine-side address validation
    fn validate_address(&self, address: &str) -> bool;

    /// Current headers-fetch progress, if a sync is running
    fn headers_fetch_progress(&self) -> Option<HeadersFetchProgress>;
}
