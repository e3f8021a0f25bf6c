//! Error types for analysis runs and session operations.

use std::time::Duration;

use nexr_evidence::EvidenceError;

use crate::session::SessionPhase;

/// Why an analysis run produced no suggestion batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Evidence collection failed.
    #[error("analysis failed: {source}")]
    Source {
        /// The underlying collection error.
        #[from]
        source: EvidenceError,
    },
    /// Collection exceeded the configured time limit.
    #[error("analysis timed out after {}ms", limit.as_millis())]
    TimedOut {
        /// The limit that was exceeded.
        limit: Duration,
    },
    /// The analysis task stopped without reporting a result.
    #[error("analysis interrupted before completion")]
    Interrupted,
}

/// Errors returned by session operations invoked in the wrong phase or
/// against unknown suggestions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The operation needs a reviewed suggestion batch and none is ready.
    #[error("cannot {operation} while session is {phase}")]
    NotReady {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase the session was in.
        phase: SessionPhase,
    },
    /// An analysis run is already in flight.
    #[error("analysis already in progress")]
    AnalysisInProgress,
    /// No analysis has been started.
    #[error("no analysis in flight")]
    NoAnalysis,
    /// The named skill is not part of the current suggestion batch.
    #[error("unknown suggestion: {skill}")]
    UnknownSkill {
        /// The name that failed to resolve.
        skill: String,
    },
}
