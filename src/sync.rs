//! Sync progress presentation
//!
//! Builds the per-wallet rows a sync details screen shows while the engine
//! fetches block headers, plus the elapsed-time and ETA strings that
//! accompany them. Callers pass the current unix time so output stays
//! deterministic under test.

use serde::Serialize;

use crate::engine::WalletEngine;
use crate::error::Result;

const SECONDS_PER_DAY: i64 = 86_400;

/// Per-wallet sync status shown on a details row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WalletSyncStatus {
    /// Queued until other wallets finish their turn
    WaitingForOtherWallets,
    Syncing,
}

/// One row of the multi-wallet sync details list
#[derive(Debug, Clone, Serialize)]
pub struct SyncDetailRow {
    pub wallet_name: String,

    pub status: WalletSyncStatus,

    /// "fetched of total" header counter, "0" before the first report
    pub fetch_count: String,

    pub days_behind: Option<String>,
}

/// Build one row per opened wallet from the engine's current state
pub fn sync_detail_rows(engine: &dyn WalletEngine, now_unix: i64) -> Result<Vec<SyncDetailRow>> {
    let progress = engine.headers_fetch_progress();
    let mut rows = Vec::new();

    for id in engine.opened_wallets() {
        let wallet = engine.wallet(id)?;

        let status = if wallet.waiting {
            WalletSyncStatus::WaitingForOtherWallets
        } else {
            WalletSyncStatus::Syncing
        };

        // Waiting wallets show their own height against the shared total;
        // the syncing wallet shows the shared fetch counter.
        let (fetch_count, days_behind_text) = match progress {
            Some(report) if wallet.waiting => (
                format!("{} of {}", wallet.best_block, report.total_headers_to_fetch),
                Some(days_behind(now_unix - wallet.best_block_timestamp)),
            ),
            Some(report) => (
                format!(
                    "{} of {}",
                    report.fetched_headers_count, report.total_headers_to_fetch
                ),
                Some(days_behind(now_unix - report.current_header_timestamp)),
            ),
            None => ("0".to_string(), None),
        };

        rows.push(SyncDetailRow {
            wallet_name: wallet.name,
            status,
            fetch_count,
            days_behind: days_behind_text,
        });
    }

    Ok(rows)
}

/// "# days behind" label for a header age in seconds
pub fn days_behind(seconds: i64) -> String {
    let days = seconds.max(0) / SECONDS_PER_DAY;
    if days == 1 {
        "1 day behind".to_string()
    } else {
        format!("{} days behind", days)
    }
}

/// Coarse elapsed-time label: seconds, minutes, hours, or days
pub fn elapsed_time(seconds: i64) -> String {
    let mut value = seconds;
    if value > 59 {
        value /= 60;
        if value > 59 {
            value /= 60;
            if value > 23 {
                value /= 24;
                return format!("{} days", value);
            }
            return format!("{} hours", value);
        }
        return format!("{} minutes", value);
    }

    format!("{} seconds", value.max(0))
}

/// Sync ETA with completion percentage
pub fn sync_time_remaining(seconds: i64, percentage_completed: i32, use_left: bool) -> String {
    let suffix = if use_left { "left" } else { "remaining" };

    if seconds > 60 {
        return format!(
            "{}% completed, {} min {}",
            percentage_completed,
            seconds / 60,
            suffix
        );
    }

    if seconds > 1 {
        return format!(
            "{}% completed, {} sec {}",
            percentage_completed, seconds, suffix
        );
    }

    format!(
        "{}% completed, less than a second {}",
        percentage_completed, suffix
    )
}

/// Bare time-left label used where no percentage is shown
pub fn time_left(seconds: i64) -> String {
    if seconds > 60 {
        return format!("{} min left", seconds / 60);
    }

    format!("{} sec left", seconds)
}
