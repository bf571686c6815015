//! CLI command implementations
//!
//! Every command runs against an in-memory demo engine seeded from the
//! configured word list; a production front end would bind the native
//! wallet library behind the same trait instead.

use anyhow::Result;
use chrono::Utc;
use dialoguer::{Confirm, Select};
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine::{HeadersFetchProgress, MemoryEngine, WalletId, WalletSummary};
use crate::quiz::QuizBuilder;
use crate::settings::{BoolSetting, BOOL_SETTING_KEYS};
use crate::sync::{sync_detail_rows, WalletSyncStatus};
use crate::verify::SeedVerification;
use crate::wordlist::Wordlist;

const DEMO_WALLET_ID: WalletId = 1;
const SECONDS_PER_DAY: i64 = 86_400;

/// Build the in-memory demo engine the commands run against
fn demo_engine(config: &Config, wordlist: &Wordlist) -> MemoryEngine {
    let seed_len = config.demo.seed_len.min(wordlist.len());
    if seed_len < config.demo.seed_len {
        warn!(
            "word list only has {} words - demo seed shortened to {}",
            wordlist.len(),
            seed_len
        );
    }

    let mut rng = match config.quiz.rng_seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let seed: Vec<String> = wordlist
        .words()
        .choose_multiple(&mut rng, seed_len)
        .cloned()
        .collect();

    let now = Utc::now().timestamp();
    let mut engine = MemoryEngine::new();
    engine.add_wallet(
        WalletSummary {
            id: DEMO_WALLET_ID,
            name: config.demo.wallet_name.clone(),
            best_block: 412_000,
            best_block_timestamp: now - 2 * SECONDS_PER_DAY,
            waiting: false,
        },
        seed,
    );
    engine.add_wallet(
        WalletSummary {
            id: DEMO_WALLET_ID + 1,
            name: format!("{}-2", config.demo.wallet_name),
            best_block: 405_500,
            best_block_timestamp: now - 9 * SECONDS_PER_DAY,
            waiting: true,
        },
        Vec::new(),
    );
    engine.set_progress(Some(HeadersFetchProgress {
        fetched_headers_count: 409_200,
        total_headers_to_fetch: 412_800,
        current_header_timestamp: now - 3 * SECONDS_PER_DAY,
    }));

    engine
}

/// Run the seed backup verification quiz
pub fn verify(config: &Config, auto: bool) -> Result<()> {
    let wordlist = Wordlist::load(&config.wordlist.path)?;
    let engine = demo_engine(config, &wordlist);
    let mut builder = QuizBuilder::new(config.quiz.rng_seed);

    let mut verification =
        SeedVerification::begin(&engine, DEMO_WALLET_ID, &wordlist, &mut builder)?;
    info!("quiz has {} steps", verification.session().len());

    loop {
        for step_index in 0..verification.session().len() {
            let choice = if auto {
                verification.session().steps()[step_index].correct_position()
            } else {
                let step = &verification.session().steps()[step_index];
                let labels: Vec<&str> = step.options().iter().map(|o| o.word.as_str()).collect();
                Select::new()
                    .with_prompt(format!("Word #{}", step_index + 1))
                    .items(&labels)
                    .default(0)
                    .interact()?
            };
            verification.select(step_index, choice)?;
        }

        match verification.submit() {
            Ok(()) => {
                println!("Seed verified - backup confirmed.");
                return Ok(());
            }
            Err(e) if e.is_recoverable() => {
                warn!("seed verification failed");
                let retry = !auto
                    && Confirm::new()
                        .with_prompt("Verification failed. Try again?")
                        .default(true)
                        .interact()?;
                if !retry {
                    anyhow::bail!("seed verification failed");
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Show per-wallet sync progress rows
pub fn sync_status(config: &Config) -> Result<()> {
    let wordlist = Wordlist::load(&config.wordlist.path)?;
    let engine = demo_engine(config, &wordlist);

    let rows = sync_detail_rows(&engine, Utc::now().timestamp())?;
    for row in rows {
        let status = match row.status {
            WalletSyncStatus::WaitingForOtherWallets => "waiting for other wallets",
            WalletSyncStatus::Syncing => "syncing...",
        };
        println!(
            "{:<14} {:<28} {:<20} {}",
            row.wallet_name,
            status,
            row.fetch_count,
            row.days_behind.unwrap_or_default()
        );
    }

    Ok(())
}

/// List the boolean settings, optionally setting or toggling one
pub fn settings(config: &Config, key: Option<String>, set: Option<bool>, toggle: bool) -> Result<()> {
    let wordlist = Wordlist::load(&config.wordlist.path)?;
    let engine = demo_engine(config, &wordlist);

    if let Some(key) = key {
        let setting = BoolSetting::new(key.as_str());
        if let Some(value) = set {
            setting.set(&engine, value);
            println!("{} = {}", key, value);
        } else if toggle {
            let value = setting.toggle(&engine);
            println!("{} = {}", key, value);
        } else {
            println!("{} = {}", key, setting.is_on(&engine));
        }
        return Ok(());
    }

    for key in BOOL_SETTING_KEYS {
        println!("{:<28} {}", key, BoolSetting::new(key).is_on(&engine));
    }

    Ok(())
}

/// Show current configuration
pub fn show_config(config: &Config) -> Result<()> {
    println!("{}", config.display());
    Ok(())
}
