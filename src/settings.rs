//! Boolean preference toggles
//!
//! Settings rows delegate storage to the engine's config store. Tapping a
//! row flips the switch and persists the new value in one step.

use crate::engine::WalletEngine;

/// Spend outputs that have not confirmed yet
pub const KEY_SPEND_UNCONFIRMED: &str = "spend_unconfirmed_funds";

/// Audible beep on each new block
pub const KEY_NEW_BLOCK_BEEP: &str = "new_block_notification";

/// System notification for incoming transactions
pub const KEY_TRANSACTION_NOTIFICATIONS: &str = "transaction_notifications";

/// All keys the settings screen lists
pub const BOOL_SETTING_KEYS: [&str; 3] = [
    KEY_SPEND_UNCONFIRMED,
    KEY_NEW_BLOCK_BEEP,
    KEY_TRANSACTION_NOTIFICATIONS,
];

/// A boolean setting backed by the engine's config store
#[derive(Debug, Clone)]
pub struct BoolSetting {
    key: String,
}

impl BoolSetting {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value; unset keys read as off
    pub fn is_on(&self, engine: &dyn WalletEngine) -> bool {
        engine.read_bool_config(&self.key, false)
    }

    pub fn set(&self, engine: &dyn WalletEngine, value: bool) {
        engine.set_bool_config(&self.key, value);
    }

    /// Flip and persist, returning the new value
    pub fn toggle(&self, engine: &dyn WalletEngine) -> bool {
        let value = !self.is_on(engine);
        engine.set_bool_config(&self.key, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;

    #[test]
    fn test_defaults_off() {
        let engine = MemoryEngine::new();
        for key in BOOL_SETTING_KEYS {
            assert!(!BoolSetting::new(key).is_on(&engine));
        }
    }

    #[test]
    fn test_set_and_read() {
        let engine = MemoryEngine::new();
        let setting = BoolSetting::new(KEY_SPEND_UNCONFIRMED);

        setting.set(&engine, true);
        assert!(setting.is_on(&engine));

        setting.set(&engine, false);
        assert!(!setting.is_on(&engine));
    }

    #[test]
    fn test_toggle_round_trip() {
        let engine = MemoryEngine::new();
        let setting = BoolSetting::new(KEY_NEW_BLOCK_BEEP);

        assert!(setting.toggle(&engine));
        assert!(setting.is_on(&engine));

        assert!(!setting.toggle(&engine));
        assert!(!setting.is_on(&engine));
    }
}
