//! CLI handler for the `accept` command.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use inquire::MultiSelect;
use tokio::runtime::Runtime;

use nexr_engine::{
    AnalysisOutcome, CommitObserver, SkillSet, SuggestionGenerator, SuggestionSession,
};
use nexr_profile::{append_history, load_skills, now_epoch_secs, save_skills, CommitEntry};

use crate::commands::{resolve_config, resolve_lexicon, resolve_source};

/// Appends each commit to the on-disk history log.
///
/// History is best-effort: a failed append logs a warning without failing
/// the commit itself, since the profile update has already happened.
struct HistoryRecorder {
    session: String,
}

impl CommitObserver for HistoryRecorder {
    fn on_commit(&self, _skills: &SkillSet, committed: &[String]) {
        let entry = CommitEntry {
            ts: now_epoch_secs(),
            session: self.session.clone(),
            skills: committed.to_vec(),
        };
        if let Err(err) = append_history(entry) {
            tracing::warn!(error = %err, "failed to record commit history");
        }
    }
}

/// Handle the `accept` command.
pub(crate) fn handle_accept_command(
    skills: Vec<String>,
    corpus: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let source = resolve_source(corpus.as_deref())?;
    let generator = SuggestionGenerator::new(resolve_lexicon(lexicon.as_deref())?);

    let session = SuggestionSession::new(load_skills()?)
        .with_generator(generator)
        .with_config(resolve_config(timeout_ms));
    let recorder = Arc::new(HistoryRecorder {
        session: session.id().to_string(),
    });
    let mut session = session.with_observer(recorder);

    let rt = Runtime::new()?;
    let outcome = rt.block_on(session.analyze(source))?;
    if let AnalysisOutcome::Failed(err) = outcome {
        return Err(anyhow!("analysis failed: {err}"));
    }
    if session.suggestions().is_empty() {
        println!("No new skills to suggest.");
        return Ok(());
    }

    let chosen = if skills.is_empty() {
        prompt_for_selection(&session)?
    } else {
        skills
    };
    if chosen.is_empty() {
        println!("Nothing accepted.");
        return Ok(());
    }
    for name in &chosen {
        session.select(name)?;
    }

    let outcome = session.commit()?;
    save_skills(&outcome.skills)?;
    println!(
        "Accepted {}: {}",
        outcome.committed.len(),
        outcome.committed.join(", ")
    );
    if !outcome.remaining.is_empty() {
        println!("{} suggestions left for review.", outcome.remaining.len());
    }
    Ok(())
}

/// Ask the user which suggestions to accept.
fn prompt_for_selection(session: &SuggestionSession) -> Result<Vec<String>> {
    if !std::io::stdout().is_terminal() {
        return Err(anyhow!(
            "interactive accept requires a TTY; pass skill names instead"
        ));
    }
    let items: Vec<String> = session
        .suggestions()
        .iter()
        .map(|s| format!("{} ({}) [{}]", s.skill, s.confidence, s.source.label()))
        .collect();
    let selected =
        MultiSelect::new("Select skills to add to your profile", items.clone()).prompt()?;

    let mut chosen = Vec::new();
    for item in &selected {
        if let Some(idx) = items.iter().position(|i| i == item) {
            chosen.push(session.suggestions()[idx].skill.clone());
        }
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexr_test_utils::{env_guard, ProfileFixture};

    #[test]
    fn test_handle_accept_command_with_names() {
        let _serial = env_guard();
        let fixture = ProfileFixture::new().expect("fixture creation");
        let _state = fixture.state_guard();
        let corpus = fixture
            .write_corpus(&[("project", "Storefront", "React and redux checkout work")])
            .expect("write corpus");

        let result = handle_accept_command(vec!["React".into()], Some(corpus), None, None);
        assert!(result.is_ok());

        let skills = nexr_profile::load_skills().expect("load skills");
        assert!(skills.contains("React"));

        let history = nexr_profile::load_history().expect("load history");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].skills, vec!["React".to_string()]);
    }

    #[test]
    fn test_handle_accept_command_unknown_name_fails() {
        let _serial = env_guard();
        let fixture = ProfileFixture::new().expect("fixture creation");
        let _state = fixture.state_guard();
        let corpus = fixture
            .write_corpus(&[("project", "Storefront", "React checkout work")])
            .expect("write corpus");

        let result = handle_accept_command(vec!["Juggling".into()], Some(corpus), None, None);
        assert!(result.is_err());

        // Nothing committed, nothing recorded.
        assert!(nexr_profile::load_skills().expect("load skills").is_empty());
        assert!(nexr_profile::load_history().expect("load history").is_empty());
    }

    #[test]
    fn test_handle_accept_command_with_nothing_to_suggest() {
        let _serial = env_guard();
        let fixture = ProfileFixture::new().expect("fixture creation");
        let _state = fixture.state_guard();
        fixture.write_skills(&["React"]).expect("seed profile");
        let corpus = fixture
            .write_corpus(&[("project", "Storefront", "React checkout work")])
            .expect("write corpus");

        let result = handle_accept_command(vec!["React".into()], Some(corpus), None, None);
        assert!(result.is_ok());

        // The only match was already on the profile, so no history entry.
        assert!(nexr_profile::load_history().expect("load history").is_empty());
    }
}
