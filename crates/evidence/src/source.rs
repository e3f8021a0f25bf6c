//! Pluggable evidence collection behind the [`EvidenceSource`] trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::{EvidenceCorpus, EvidenceRecord};

/// Errors surfaced by evidence collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvidenceError {
    /// The backing source could not produce a corpus.
    #[error("evidence source unavailable: {reason}")]
    Unavailable {
        /// Why collection failed, suitable for display.
        reason: String,
    },
}

impl EvidenceError {
    /// Convenience constructor for the common failure case.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// A provider of evidence for analysis.
///
/// Implementations may hit the network, read local exports, or fabricate
/// data for tests. Collection is async so slow providers never block the
/// caller's thread.
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    /// Collect the full corpus for one analysis run.
    async fn collect(&self) -> Result<EvidenceCorpus, EvidenceError>;
}

/// Source that returns a pre-built corpus immediately.
///
/// Used for corpora loaded from disk and as the deterministic source in
/// tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    corpus: EvidenceCorpus,
}

impl StaticSource {
    /// Wrap an existing corpus.
    #[must_use]
    pub fn new(corpus: EvidenceCorpus) -> Self {
        Self { corpus }
    }
}

#[async_trait]
impl EvidenceSource for StaticSource {
    async fn collect(&self) -> Result<EvidenceCorpus, EvidenceError> {
        Ok(self.corpus.clone())
    }
}

/// Default artificial delay for [`SimulatedSource`].
const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(1200);

/// Source that mimics a remote analysis backend.
///
/// Sleeps for a configurable latency before resolving, and can be scripted
/// to fail. This is what the demo pipeline runs against when no corpus file
/// is supplied.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    corpus: EvidenceCorpus,
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedSource {
    /// Create a simulated source that resolves to `corpus` after the
    /// default latency.
    #[must_use]
    pub fn new(corpus: EvidenceCorpus) -> Self {
        Self {
            corpus,
            latency: DEFAULT_SIMULATED_LATENCY,
            failure: None,
        }
    }

    /// Override the artificial latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Script the source to fail with `reason` instead of resolving.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            corpus: EvidenceCorpus::default(),
            latency: DEFAULT_SIMULATED_LATENCY,
            failure: Some(reason.into()),
        }
    }

    /// Canned corpus describing a plausible frontend-leaning user.
    ///
    /// Written so that analysis yields a spread of suggestion kinds:
    /// direct project matches, contribution matches, and enough related
    /// terms for inferred suggestions.
    #[must_use]
    pub fn sample() -> Self {
        let records = vec![
            EvidenceRecord::project(
                "Storefront Revamp",
                "Rebuilt the checkout flow in React with TypeScript and Redux state management",
            ),
            EvidenceRecord::project(
                "Partner Dashboard",
                "React admin dashboard consuming REST endpoints, with chart-heavy data visualization",
            ),
            EvidenceRecord::project(
                "Webhook Relay",
                "Node service bridging payment providers, retry queues and HMAC request signing",
            ),
            EvidenceRecord::contribution(
                "OAuth integration guide",
                "Wrote the team's how-to for connecting external APIs with token refresh",
            ),
            EvidenceRecord::contribution(
                "Component library review",
                "Reviewed accessibility and keyboard handling across the shared UI kit",
            ),
            EvidenceRecord::contribution(
                "CI pipeline cleanup",
                "Moved frontend test suites onto the shared GitHub Actions workflow",
            ),
        ];
        Self::new(EvidenceCorpus::new(records))
    }
}

#[async_trait]
impl EvidenceSource for SimulatedSource {
    async fn collect(&self) -> Result<EvidenceCorpus, EvidenceError> {
        tracing::debug!(latency_ms = %self.latency.as_millis(), "simulated evidence collection");
        tokio::time::sleep(self.latency).await;
        if let Some(reason) = &self.failure {
            return Err(EvidenceError::unavailable(reason.clone()));
        }
        Ok(self.corpus.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EvidenceKind;

    #[tokio::test]
    async fn static_source_returns_corpus_unchanged() {
        let corpus = EvidenceCorpus::new(vec![EvidenceRecord::project("A", "B")]);
        let source = StaticSource::new(corpus.clone());
        assert_eq!(source.collect().await.unwrap(), corpus);
    }

    #[tokio::test]
    async fn simulated_source_resolves_after_latency() {
        let source = SimulatedSource::new(EvidenceCorpus::default())
            .with_latency(Duration::from_millis(5));
        let corpus = source.collect().await.unwrap();
        assert!(corpus.is_empty());
    }

    #[tokio::test]
    async fn simulated_source_failure_is_reported() {
        let source = SimulatedSource::failing("backend offline").with_latency(Duration::ZERO);
        let err = source.collect().await.unwrap_err();
        assert_eq!(err, EvidenceError::unavailable("backend offline"));
    }

    #[test]
    fn sample_corpus_mixes_projects_and_contributions() {
        let source = SimulatedSource::sample();
        let projects = source
            .corpus
            .iter()
            .filter(|r| r.kind == EvidenceKind::Project)
            .count();
        let contributions = source
            .corpus
            .iter()
            .filter(|r| r.kind == EvidenceKind::Contribution)
            .count();
        assert!(projects >= 2);
        assert!(contributions >= 2);
    }
}
