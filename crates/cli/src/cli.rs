use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for suggestion listings.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Ranked list for humans.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `nexr` application.
#[derive(Debug, Parser)]
#[command(
    name = "nexr",
    about = "Suggests profile skills from project and contribution evidence"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available `nexr` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyzes evidence and prints ranked skill suggestions.
    Suggest {
        /// Evidence corpus JSON file (default: built-in simulated source).
        #[arg(long, value_name = "FILE")]
        corpus: Option<PathBuf>,
        /// TOML file overriding the built-in skill lexicon.
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
        /// Maximum suggestions to show.
        #[arg(long, env = "NEXR_SUGGEST_LIMIT", default_value_t = 8)]
        limit: usize,
        /// Drops suggestions scoring below this confidence (percent).
        #[arg(long, default_value_t = nexr_engine::DEFAULT_MIN_CONFIDENCE)]
        min_confidence: u8,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Analysis timeout in milliseconds (overrides `NEXR_ANALYSIS_TIMEOUT_MS`).
        #[arg(long, value_name = "MILLIS")]
        timeout_ms: Option<u64>,
    },
    /// Reviews suggestions and commits accepted ones to the profile.
    Accept {
        /// Skill names to accept without prompting (interactive when empty).
        skills: Vec<String>,
        /// Evidence corpus JSON file (default: built-in simulated source).
        #[arg(long, value_name = "FILE")]
        corpus: Option<PathBuf>,
        /// TOML file overriding the built-in skill lexicon.
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
        /// Analysis timeout in milliseconds (overrides `NEXR_ANALYSIS_TIMEOUT_MS`).
        #[arg(long, value_name = "MILLIS")]
        timeout_ms: Option<u64>,
    },
    /// Lists profile skills, with optional direct edits.
    Skills {
        /// Adds a skill by name before listing (repeatable).
        #[arg(long, value_name = "NAME")]
        add: Vec<String>,
        /// Removes a skill by name before listing (repeatable).
        #[arg(long, value_name = "NAME")]
        remove: Vec<String>,
    },
    /// Shows recent commit history.
    History {
        /// Limits number of entries shown (most recent first).
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}
