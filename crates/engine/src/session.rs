//! Suggestion review sessions: one user's path from analysis to commit.
//!
//! A session owns the profile's skill set, runs analysis in a background
//! task, holds the resulting suggestion batch, tracks accept/unaccept
//! toggles, and applies commits. Phases move Idle -> Analyzing -> Ready;
//! commits keep the session Ready with the batch reduced, so review can
//! continue without re-analyzing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use nexr_evidence::EvidenceSource;

use crate::error::{AnalysisError, SessionError};
use crate::filter::filter_known;
use crate::generate::SuggestionGenerator;
use crate::ledger::SelectionLedger;
use crate::reconcile::{self, CommitOutcome};
use crate::types::{SkillSet, SkillSuggestion};

/// Default wall-clock limit for one analysis run.
pub const DEFAULT_ANALYSIS_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding the analysis timeout, in milliseconds.
pub const ANALYSIS_TIMEOUT_ENV: &str = "NEXR_ANALYSIS_TIMEOUT_MS";

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No batch available; nothing running.
    Idle,
    /// An analysis task is in flight.
    Analyzing,
    /// A batch (possibly empty) is available for review.
    Ready,
}

impl SessionPhase {
    /// Human-readable label for display output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzing => "analyzing",
            Self::Ready => "ready",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How an analysis run concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Suggestions are ready for review.
    Ready {
        /// Number of fresh suggestions in the batch.
        suggestions: usize,
    },
    /// Analysis failed; the session is ready with an empty batch and the
    /// failure is retained for display.
    Failed(AnalysisError),
}

/// Callback fired after skills are committed to the profile.
///
/// Observers see each successful commit exactly once, immediately after the
/// profile is updated. Empty commits do not notify.
pub trait CommitObserver: Send + Sync {
    /// Called with the updated profile and the names that were added.
    fn on_commit(&self, skills: &SkillSet, committed: &[String]);
}

/// Tunables for a session's analysis runs.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock limit for evidence collection plus generation.
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_ANALYSIS_TIMEOUT_MS),
        }
    }
}

impl SessionConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// An unset variable is the default; a set but unparseable one logs a
    /// warning and keeps the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(ANALYSIS_TIMEOUT_ENV) {
            match raw.parse::<u64>() {
                Ok(ms) => config.timeout = Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        "ignoring invalid {ANALYSIS_TIMEOUT_ENV}, using default"
                    );
                }
            }
        }
        config
    }
}

struct InFlight {
    rx: oneshot::Receiver<Result<Vec<SkillSuggestion>, AnalysisError>>,
    handle: JoinHandle<()>,
}

/// One user's suggestion review session.
pub struct SuggestionSession {
    id: Uuid,
    skills: SkillSet,
    generator: Arc<SuggestionGenerator>,
    config: SessionConfig,
    phase: SessionPhase,
    batch: Vec<SkillSuggestion>,
    ledger: SelectionLedger,
    last_failure: Option<AnalysisError>,
    observer: Option<Arc<dyn CommitObserver>>,
    in_flight: Option<InFlight>,
}

impl SuggestionSession {
    /// Open a session over the user's current skills.
    #[must_use]
    pub fn new(skills: SkillSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            skills,
            generator: Arc::new(SuggestionGenerator::default()),
            config: SessionConfig::default(),
            phase: SessionPhase::Idle,
            batch: Vec::new(),
            ledger: SelectionLedger::new(),
            last_failure: None,
            observer: None,
            in_flight: None,
        }
    }

    /// Replace the suggestion generator.
    #[must_use]
    pub fn with_generator(mut self, generator: SuggestionGenerator) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Replace the session config.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a commit observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn CommitObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The profile's current skills.
    #[must_use]
    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// The current suggestion batch, ranked.
    #[must_use]
    pub fn suggestions(&self) -> &[SkillSuggestion] {
        &self.batch
    }

    /// Names currently marked for commit, in selection order.
    #[must_use]
    pub fn pending(&self) -> &[String] {
        self.ledger.selected()
    }

    /// The failure from the last analysis run, if it failed.
    #[must_use]
    pub fn last_failure(&self) -> Option<&AnalysisError> {
        self.last_failure.as_ref()
    }

    /// Kick off analysis against an evidence source.
    ///
    /// The previous batch and any pending selections are discarded. Fails
    /// with [`SessionError::AnalysisInProgress`] if a run is already in
    /// flight.
    pub fn start_analysis(
        &mut self,
        source: Arc<dyn EvidenceSource>,
    ) -> Result<(), SessionError> {
        if self.in_flight.is_some() {
            return Err(SessionError::AnalysisInProgress);
        }

        self.phase = SessionPhase::Analyzing;
        self.batch.clear();
        self.ledger.clear();
        self.last_failure = None;

        let (tx, rx) = oneshot::channel();
        let generator = Arc::clone(&self.generator);
        let timeout = self.config.timeout;
        let session = self.id;
        tracing::debug!(session = %session, timeout_ms = %timeout.as_millis(), "analysis started");

        let handle = tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, source.collect()).await {
                Ok(Ok(corpus)) => Ok(generator.generate(&corpus)),
                Ok(Err(err)) => Err(AnalysisError::from(err)),
                Err(_) => Err(AnalysisError::TimedOut { limit: timeout }),
            };
            if tx.send(result).is_err() {
                // Session cancelled or dropped; the result is discarded.
                tracing::debug!(session = %session, "analysis result discarded");
            }
        });

        self.in_flight = Some(InFlight { rx, handle });
        Ok(())
    }

    /// Wait for the in-flight analysis and absorb its result.
    ///
    /// On success the batch holds fresh suggestions with already-listed
    /// skills filtered out. On failure the session still becomes Ready,
    /// with an empty batch and the failure retained, so callers can render
    /// the distinction.
    pub async fn finish_analysis(&mut self) -> Result<AnalysisOutcome, SessionError> {
        let in_flight = self.in_flight.take().ok_or(SessionError::NoAnalysis)?;
        let result = match in_flight.rx.await {
            Ok(result) => result,
            Err(_) => Err(AnalysisError::Interrupted),
        };

        self.ledger.clear();
        self.phase = SessionPhase::Ready;
        match result {
            Ok(suggestions) => {
                let fresh = filter_known(suggestions, &self.skills);
                tracing::debug!(
                    session = %self.id,
                    suggestions = fresh.len(),
                    "analysis ready"
                );
                self.batch = fresh;
                Ok(AnalysisOutcome::Ready {
                    suggestions: self.batch.len(),
                })
            }
            Err(err) => {
                tracing::warn!(session = %self.id, error = %err, "analysis failed");
                self.batch.clear();
                self.last_failure = Some(err.clone());
                Ok(AnalysisOutcome::Failed(err))
            }
        }
    }

    /// Run one full analysis cycle: start, then wait for the result.
    pub async fn analyze(
        &mut self,
        source: Arc<dyn EvidenceSource>,
    ) -> Result<AnalysisOutcome, SessionError> {
        self.start_analysis(source)?;
        self.finish_analysis().await
    }

    /// Abort the in-flight analysis, if any. Returns true when a run was
    /// cancelled. Any result the task produces afterwards is discarded and
    /// the session returns to Idle.
    pub fn cancel_analysis(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                in_flight.handle.abort();
                self.phase = SessionPhase::Idle;
                tracing::debug!(session = %self.id, "analysis cancelled");
                true
            }
            None => false,
        }
    }

    /// Mark a suggested skill for commit.
    ///
    /// The name is resolved case-insensitively against the batch; marking
    /// something not in the batch is an error. Returns false when the
    /// suggestion was already marked.
    pub fn select(&mut self, skill: &str) -> Result<bool, SessionError> {
        self.ensure_ready("select")?;
        let canonical = self
            .batch
            .iter()
            .find(|s| s.skill.eq_ignore_ascii_case(skill))
            .map(|s| s.skill.clone())
            .ok_or_else(|| SessionError::UnknownSkill {
                skill: skill.to_string(),
            })?;
        Ok(self.ledger.select(canonical))
    }

    /// Unmark a previously selected skill. Unmarking something that was
    /// never selected is a quiet no-op returning false.
    pub fn deselect(&mut self, skill: &str) -> Result<bool, SessionError> {
        self.ensure_ready("deselect")?;
        Ok(self.ledger.deselect(skill))
    }

    /// Commit the marked suggestions to the profile.
    ///
    /// The accepted skills join the profile, the batch shrinks by exactly
    /// those entries, and the session stays Ready for further review. An
    /// empty selection commits nothing and changes nothing. The observer,
    /// if any, is notified only when skills were actually added.
    pub fn commit(&mut self) -> Result<CommitOutcome, SessionError> {
        self.ensure_ready("commit")?;
        let accepted = self.ledger.take();
        let batch = std::mem::take(&mut self.batch);
        let outcome = reconcile::commit(&self.skills, &accepted, batch);

        self.skills = outcome.skills.clone();
        self.batch = outcome.remaining.clone();

        if !outcome.committed.is_empty() {
            tracing::info!(
                session = %self.id,
                committed = outcome.committed.len(),
                "skills committed to profile"
            );
            if let Some(observer) = &self.observer {
                observer.on_commit(&self.skills, &outcome.committed);
            }
        }
        Ok(outcome)
    }

    fn ensure_ready(&self, operation: &'static str) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Ready => Ok(()),
            phase => Err(SessionError::NotReady { operation, phase }),
        }
    }
}

impl Drop for SuggestionSession {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}

impl std::fmt::Debug for SuggestionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionSession")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("skills", &self.skills.len())
            .field("batch", &self.batch.len())
            .field("pending", &self.ledger.len())
            .finish_non_exhaustive()
    }
}
