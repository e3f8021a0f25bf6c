//! Skill suggestion engine for nexr profiles.
//!
//! This crate provides:
//! - Term matching and ranked suggestion generation over evidence corpora
//! - Dedup filtering against the profile's current skills
//! - Review sessions with async analysis, accept toggles, and atomic commits
//! - A replaceable ranking policy and a TOML-configurable skill lexicon

#![deny(unsafe_code)]

pub mod error;
pub mod filter;
pub mod generate;
pub mod ledger;
pub mod lexicon;
pub mod reconcile;
pub mod session;
pub mod types;

pub use error::{AnalysisError, SessionError};
pub use filter::filter_known;
pub use generate::{
    MatchSignal, RankingPolicy, SuggestionGenerator, WeightedPolicy, DEFAULT_FUZZY_THRESHOLD,
    DEFAULT_MIN_CONFIDENCE,
};
pub use ledger::SelectionLedger;
pub use lexicon::{SkillLexicon, TermSpec};
pub use reconcile::CommitOutcome;
pub use session::{
    AnalysisOutcome, CommitObserver, SessionConfig, SessionPhase, SuggestionSession,
    ANALYSIS_TIMEOUT_ENV, DEFAULT_ANALYSIS_TIMEOUT_MS,
};
pub use types::{Confidence, SkillSet, SkillSuggestion, SuggestionSource};
