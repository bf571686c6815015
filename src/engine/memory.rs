//! In-memory wallet engine
//!
//! Stands in for the native engine in the demo binary and the test suite.
//! Wallets and sync progress are fixed at setup; the config store is
//! mutable through the trait like the real engine's.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::engine::{HeadersFetchProgress, WalletEngine, WalletId, WalletSummary};
use crate::error::{Error, Result};

/// A wallet registered with the in-memory engine
#[derive(Debug, Clone)]
struct MemoryWallet {
    summary: WalletSummary,
    seed: Vec<String>,
}

/// In-memory [`WalletEngine`] implementation
pub struct MemoryEngine {
    wallets: BTreeMap<WalletId, MemoryWallet>,
    config: Mutex<HashMap<String, bool>>,
    progress: Option<HeadersFetchProgress>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self {
            wallets: BTreeMap::new(),
            config: Mutex::new(HashMap::new()),
            progress: None,
        }
    }

    /// Register a wallet with its recovery phrase
    ///
    /// An empty phrase models a wallet whose seed backup was already
    /// verified and discarded.
    pub fn add_wallet(&mut self, summary: WalletSummary, seed: Vec<String>) {
        self.wallets.insert(summary.id, MemoryWallet { summary, seed });
    }

    /// Publish a headers-fetch progress report
    pub fn set_progress(&mut self, progress: Option<HeadersFetchProgress>) {
        self.progress = progress;
    }

    fn lookup(&self, id: WalletId) -> Result<&MemoryWallet> {
        self.wallets.get(&id).ok_or(Error::WalletNotFound(id))
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletEngine for MemoryEngine {
    fn opened_wallets(&self) -> Vec<WalletId> {
        self.wallets.keys().copied().collect()
    }

    fn wallet(&self, id: WalletId) -> Result<WalletSummary> {
        Ok(self.lookup(id)?.summary.clone())
    }

    fn seed_words(&self, id: WalletId) -> Result<Vec<String>> {
        let wallet = self.lookup(id)?;
        if wallet.seed.is_empty() {
            return Err(Error::SeedUnavailable(id));
        }

        Ok(wallet.seed.clone())
    }

    fn verify_seed(&self, id: WalletId, mnemonic: &str) -> Result<()> {
        let wallet = self.lookup(id)?;
        if wallet.seed.is_empty() {
            return Err(Error::SeedUnavailable(id));
        }

        if wallet.seed.join(" ") != mnemonic {
            return Err(Error::VerificationFailed);
        }

        Ok(())
    }

    fn read_bool_config(&self, key: &str, default: bool) -> bool {
        self.config
            .lock()
            .unwrap()
            .get(key)
            .copied()
            .unwrap_or(default)
    }

    fn set_bool_config(&self, key: &str, value: bool) {
        self.config.lock().unwrap().insert(key.to_string(), value);
    }

    // Length and charset sanity only; the real engine does full
    // base58/checksum validation.
    fn validate_address(&self, address: &str) -> bool {
        (26..=44).contains(&address.len()) && address.chars().all(|c| c.is_ascii_alphanumeric())
    }

    fn headers_fetch_progress(&self) -> Option<HeadersFetchProgress> {
        self.progress
    }
}
