//! CLI command handlers.

pub(crate) mod accept;
pub(crate) mod history;
pub(crate) mod skills;
pub(crate) mod suggest;

pub(crate) use accept::handle_accept_command;
pub(crate) use history::handle_history_command;
pub(crate) use skills::handle_skills_command;
pub(crate) use suggest::handle_suggest_command;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use nexr_engine::{SessionConfig, SkillLexicon};
use nexr_evidence::{load_corpus, EvidenceSource, SimulatedSource, StaticSource};

/// Resolve the evidence source: a corpus file when given, otherwise the
/// built-in simulated provider.
pub(crate) fn resolve_source(corpus: Option<&Path>) -> Result<Arc<dyn EvidenceSource>> {
    match corpus {
        Some(path) => {
            let corpus = load_corpus(path)?;
            Ok(Arc::new(StaticSource::new(corpus)))
        }
        None => Ok(Arc::new(SimulatedSource::sample())),
    }
}

/// Resolve the skill lexicon: a TOML file when given, otherwise the built-in
/// term table.
pub(crate) fn resolve_lexicon(path: Option<&Path>) -> Result<SkillLexicon> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading lexicon {}", path.display()))?;
            SkillLexicon::from_toml_str(&raw)
        }
        None => Ok(SkillLexicon::builtin()),
    }
}

/// Session config from the environment, with the CLI flag taking precedence.
pub(crate) fn resolve_config(timeout_ms: Option<u64>) -> SessionConfig {
    let mut config = SessionConfig::from_env();
    if let Some(ms) = timeout_ms {
        config.timeout = Duration::from_millis(ms);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexr_test_utils::ProfileFixture;

    #[test]
    fn test_resolve_lexicon_defaults_to_builtin() {
        let lexicon = resolve_lexicon(None).expect("builtin lexicon");
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn test_resolve_lexicon_reads_toml_overrides() {
        let fixture = ProfileFixture::new().expect("fixture creation");
        let path = fixture.tempdir.path().join("lexicon.toml");
        std::fs::write(
            &path,
            r#"
[[term]]
name = "Rust"
aliases = ["rustlang"]
"#,
        )
        .expect("write lexicon");

        let lexicon = resolve_lexicon(Some(&path)).expect("parse lexicon");
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.terms()[0].name, "Rust");
    }

    #[test]
    fn test_resolve_lexicon_missing_file_fails() {
        let fixture = ProfileFixture::new().expect("fixture creation");
        let missing = fixture.tempdir.path().join("nope.toml");
        assert!(resolve_lexicon(Some(&missing)).is_err());
    }

    #[test]
    fn test_resolve_config_flag_beats_default() {
        let config = resolve_config(Some(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }
}
