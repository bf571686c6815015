//! walletui - demo front end for the wallet presentation core
//!
//! Drives the seed verification quiz, sync status rows, and settings
//! toggles against an in-memory engine. A production app binds the native
//! wallet library behind [`wallet_ui_core::engine::WalletEngine`] instead.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

// Use the library crate
use wallet_ui_core::cli::commands;
use wallet_ui_core::config::Config;

/// Wallet presentation core demo
#[derive(Parser)]
#[command(name = "walletui")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the seed backup verification quiz
    Verify {
        /// Answer every step correctly without prompting
        #[arg(long)]
        auto: bool,
    },

    /// Show per-wallet sync progress
    SyncStatus,

    /// List or change boolean settings
    Settings {
        /// Setting key
        key: Option<String>,

        /// Set the key to this value
        #[arg(long)]
        set: Option<bool>,

        /// Flip the key's current value
        #[arg(long)]
        toggle: bool,
    },

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wallet_ui_core=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Verify { auto } => commands::verify(&config, auto),
        Commands::SyncStatus => commands::sync_status(&config),
        Commands::Settings { key, set, toggle } => commands::settings(&config, key, set, toggle),
        Commands::Config => commands::show_config(&config),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
