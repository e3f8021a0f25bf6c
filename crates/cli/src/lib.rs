//! Command dispatch for the `nexr` binary.
//!
//! Parses arguments, initializes tracing, and routes each subcommand to its
//! handler. Running with no subcommand behaves like `nexr suggest`.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands::{
    handle_accept_command, handle_history_command, handle_skills_command, handle_suggest_command,
};

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Suggest {
        corpus: None,
        lexicon: None,
        limit: 8,
        min_confidence: nexr_engine::DEFAULT_MIN_CONFIDENCE,
        format: OutputFormat::Text,
        timeout_ms: None,
    }) {
        Commands::Suggest {
            corpus,
            lexicon,
            limit,
            min_confidence,
            format,
            timeout_ms,
        } => handle_suggest_command(corpus, lexicon, limit, min_confidence, format, timeout_ms),
        Commands::Accept {
            skills,
            corpus,
            lexicon,
            timeout_ms,
        } => handle_accept_command(skills, corpus, lexicon, timeout_ms),
        Commands::Skills { add, remove } => handle_skills_command(add, remove),
        Commands::History { limit } => handle_history_command(limit),
    }
}
