//! Seed backup verification flow
//!
//! Drives one verification attempt: fetch the wallet's recovery phrase,
//! build the quiz, collect selections, and submit the assembled mnemonic to
//! the engine for the authoritative check.

use tracing::{info, warn};

use crate::engine::{WalletEngine, WalletId};
use crate::error::Result;
use crate::quiz::{QuizBuilder, QuizSession};
use crate::wordlist::Wordlist;

/// One seed verification attempt for a single wallet
///
/// Discarded when the screen closes; a fresh attempt rebuilds the quiz with
/// new distractors.
pub struct SeedVerification<'a> {
    engine: &'a dyn WalletEngine,
    wallet_id: WalletId,
    phrase: Vec<String>,
    session: QuizSession,
}

impl<'a> SeedVerification<'a> {
    /// Start a verification attempt for one wallet
    pub fn begin(
        engine: &'a dyn WalletEngine,
        wallet_id: WalletId,
        wordlist: &Wordlist,
        builder: &mut QuizBuilder,
    ) -> Result<Self> {
        let phrase = engine.seed_words(wallet_id)?;
        let session = builder.build_session(wordlist, &phrase)?;
        info!(
            "seed verification started for wallet {} ({} words)",
            wallet_id,
            phrase.len()
        );

        Ok(Self {
            engine,
            wallet_id,
            phrase,
            session,
        })
    }

    pub fn wallet_id(&self) -> WalletId {
        self.wallet_id
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Record the chosen option for a step
    pub fn select(&mut self, step_index: usize, option_index: usize) -> Result<()> {
        self.session.select(step_index, option_index)
    }

    /// Enable signal for the submit control
    pub fn ready_to_submit(&self) -> bool {
        self.session.is_complete()
    }

    /// Grade locally, then hand the assembled mnemonic to the engine
    ///
    /// The engine's check is authoritative; the local grade only
    /// short-circuits the plain wrong-answer case. The session is left
    /// intact on failure so the user can change selections and submit
    /// again.
    pub fn submit(&self) -> Result<()> {
        let mnemonic = self.session.assembled_phrase()?;

        if let Err(e) = self.session.grade(&self.phrase) {
            warn!("seed verification failed for wallet {}", self.wallet_id);
            return Err(e);
        }

        self.engine.verify_seed(self.wallet_id, &mnemonic)?;
        info!("seed verified for wallet {}", self.wallet_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{HeadersFetchProgress, MemoryEngine, WalletSummary};
    use crate::error::Error;

    fn wordlist() -> Wordlist {
        let words = [
            "ability", "absorb", "acid", "across", "action", "advice", "airport", "alarm",
            "album", "alert", "alien", "almost", "alpha", "amber", "anchor", "angle", "animal",
            "ankle", "antenna", "apple", "arrow", "artist", "aspect", "assume", "athlete",
            "atlas", "auction", "autumn", "avenue", "awake", "axis", "cabin", "drama",
        ];
        Wordlist::new(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    fn engine_with_seed(seed: &[&str]) -> MemoryEngine {
        let mut engine = MemoryEngine::new();
        engine.add_wallet(
            WalletSummary {
                id: 7,
                name: "primary".to_string(),
                best_block: 1000,
                best_block_timestamp: 1_700_000_000,
                waiting: false,
            },
            seed.iter().map(|w| w.to_string()).collect(),
        );
        engine
    }

    fn select_all_correct(verification: &mut SeedVerification) {
        for i in 0..verification.session().len() {
            let correct = verification.session().steps()[i].correct_position();
            verification.select(i, correct).unwrap();
        }
    }

    #[test]
    fn test_happy_path() {
        let wordlist = wordlist();
        let engine = engine_with_seed(&["ability", "cabin", "drama"]);
        let mut builder = QuizBuilder::new(Some(11));

        let mut verification = SeedVerification::begin(&engine, 7, &wordlist, &mut builder).unwrap();
        assert_eq!(verification.session().len(), 3);
        assert!(!verification.ready_to_submit());

        select_all_correct(&mut verification);
        assert!(verification.ready_to_submit());
        assert!(verification.submit().is_ok());
    }

    #[test]
    fn test_wrong_answer_retry() {
        let wordlist = wordlist();
        let engine = engine_with_seed(&["ability", "cabin", "drama"]);
        let mut builder = QuizBuilder::new(Some(11));

        let mut verification = SeedVerification::begin(&engine, 7, &wordlist, &mut builder).unwrap();
        select_all_correct(&mut verification);

        // flip one answer to a distractor
        let wrong = (verification.session().steps()[1].correct_position() + 1) % 3;
        verification.select(1, wrong).unwrap();

        let err = verification.submit().unwrap_err();
        assert!(matches!(err, Error::VerificationFailed));
        assert!(err.is_recoverable());

        // session is intact; fixing the answer succeeds
        assert!(verification.ready_to_submit());
        let correct = verification.session().steps()[1].correct_position();
        verification.select(1, correct).unwrap();
        assert!(verification.submit().is_ok());
    }

    #[test]
    fn test_submit_requires_completion() {
        let wordlist = wordlist();
        let engine = engine_with_seed(&["ability", "cabin", "drama"]);
        let mut builder = QuizBuilder::new(Some(11));

        let mut verification = SeedVerification::begin(&engine, 7, &wordlist, &mut builder).unwrap();
        verification.select(0, 0).unwrap();

        assert!(matches!(
            verification.submit(),
            Err(Error::IncompleteSession)
        ));
    }

    #[test]
    fn test_seed_unavailable() {
        let wordlist = wordlist();
        let engine = engine_with_seed(&[]);
        let mut builder = QuizBuilder::new(Some(11));

        assert!(matches!(
            SeedVerification::begin(&engine, 7, &wordlist, &mut builder),
            Err(Error::SeedUnavailable(7))
        ));
    }

    #[test]
    fn test_engine_check_is_authoritative() {
        /// Engine whose stored seed disagrees with what it reports, as a
        /// corrupted backend would
        struct DisagreeingEngine {
            inner: MemoryEngine,
        }

        impl WalletEngine for DisagreeingEngine {
            fn opened_wallets(&self) -> Vec<WalletId> {
                self.inner.opened_wallets()
            }
            fn wallet(&self, id: WalletId) -> Result<WalletSummary> {
                self.inner.wallet(id)
            }
            fn seed_words(&self, id: WalletId) -> Result<Vec<String>> {
                self.inner.seed_words(id)
            }
            fn verify_seed(&self, _id: WalletId, _mnemonic: &str) -> Result<()> {
                Err(Error::VerificationFailed)
            }
            fn read_bool_config(&self, key: &str, default: bool) -> bool {
                self.inner.read_bool_config(key, default)
            }
            fn set_bool_config(&self, key: &str, value: bool) {
                self.inner.set_bool_config(key, value)
            }
            fn validate_address(&self, address: &str) -> bool {
                self.inner.validate_address(address)
            }
            fn headers_fetch_progress(&self) -> Option<HeadersFetchProgress> {
                self.inner.headers_fetch_progress()
            }
        }

        let wordlist = wordlist();
        let engine = DisagreeingEngine {
            inner: engine_with_seed(&["ability", "cabin", "drama"]),
        };
        let mut builder = QuizBuilder::new(Some(11));

        let mut verification = SeedVerification::begin(&engine, 7, &wordlist, &mut builder).unwrap();
        select_all_correct(&mut verification);

        // local grade passes but the engine still rejects
        assert!(matches!(
            verification.submit(),
            Err(Error::VerificationFailed)
        ));
    }
}
