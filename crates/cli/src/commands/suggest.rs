//! CLI handler for the `suggest` command.

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use nexr_engine::{
    AnalysisOutcome, Confidence, SkillSuggestion, SuggestionGenerator, SuggestionSession,
};
use nexr_profile::load_skills;

use crate::cli::OutputFormat;
use crate::commands::{resolve_config, resolve_lexicon, resolve_source};

/// JSON payload for `suggest --format json`.
#[derive(Debug, Serialize)]
struct SuggestReport {
    total_found: usize,
    suggestions: Vec<SkillSuggestion>,
}

/// Handle the `suggest` command.
pub(crate) fn handle_suggest_command(
    corpus: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    limit: usize,
    min_confidence: u8,
    format: OutputFormat,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let source = resolve_source(corpus.as_deref())?;
    let generator = SuggestionGenerator::new(resolve_lexicon(lexicon.as_deref())?)
        .with_min_confidence(Confidence::new(min_confidence));

    let mut session = SuggestionSession::new(load_skills()?)
        .with_generator(generator)
        .with_config(resolve_config(timeout_ms));

    let rt = Runtime::new()?;
    let outcome = rt.block_on(session.analyze(source))?;
    if let AnalysisOutcome::Failed(err) = outcome {
        return Err(anyhow!("analysis failed: {err}"));
    }

    let total_found = session.suggestions().len();
    let shown: Vec<SkillSuggestion> = session.suggestions().iter().take(limit).cloned().collect();

    match format {
        OutputFormat::Json => {
            let report = SuggestReport {
                total_found,
                suggestions: shown,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_suggestions_human(&shown, total_found),
    }
    Ok(())
}

/// Print suggestions in human-readable form.
fn print_suggestions_human(suggestions: &[SkillSuggestion], total_found: usize) {
    if suggestions.is_empty() {
        println!("(no new skill suggestions)");
        return;
    }
    println!(
        "Suggested skills ({} found, showing {}):",
        total_found,
        suggestions.len()
    );
    for (idx, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:>3}. {} ({}) [{}]",
            idx + 1,
            suggestion.skill,
            suggestion.confidence,
            suggestion.source.label()
        );
        for citation in &suggestion.evidence {
            println!("       {citation}");
        }
    }
}
