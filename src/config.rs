//! Configuration loading and validation

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wordlist: WordlistConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordlistConfig {
    /// Plain text word list, one word per line
    #[serde(default = "default_wordlist_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
    /// Fixed RNG seed for reproducible sessions; unset draws from entropy
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Name of the demo wallet the CLI registers
    #[serde(default = "default_wallet_name")]
    pub wallet_name: String,

    /// Number of recovery phrase words the demo wallet uses
    #[serde(default = "default_seed_len")]
    pub seed_len: usize,
}

// Default value functions
fn default_wordlist_path() -> String {
    "wordlist.txt".to_string()
}

fn default_wallet_name() -> String {
    "default".to_string()
}

fn default_seed_len() -> usize {
    33
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            path: default_wordlist_path(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self { rng_seed: None }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            wallet_name: default_wallet_name(),
            seed_len: default_seed_len(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: WordlistConfig::default(),
            quiz: QuizConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let settings = config::Config::builder()
            // Start with defaults
            .set_default("wordlist.path", default_wordlist_path())?
            .set_default("demo.wallet_name", default_wallet_name())?
            .set_default("demo.seed_len", default_seed_len() as i64)?
            // Load from file if exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (prefix WALLETUI_)
            .add_source(
                config::Environment::with_prefix("WALLETUI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.wordlist.path.trim().is_empty() {
            anyhow::bail!("wordlist.path must not be empty");
        }

        if self.demo.seed_len == 0 {
            anyhow::bail!("demo.seed_len must be positive");
        }

        if let Some(seed) = self.quiz.rng_seed {
            tracing::warn!(
                "quiz.rng_seed is fixed to {} - quiz sessions are reproducible",
                seed
            );
        }

        Ok(())
    }

    /// Configuration summary for display
    pub fn display(&self) -> String {
        format!(
            r#"Configuration:
  Wordlist:
    path: {}
  Quiz:
    rng_seed: {}
  Demo:
    wallet_name: {}
    seed_len: {}
"#,
            self.wordlist.path,
            self.quiz
                .rng_seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "(entropy)".to_string()),
            self.demo.wallet_name,
            self.demo.seed_len,
        )
    }
}
