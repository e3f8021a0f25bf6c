//! Core evidence types: records, kinds, and the corpus container.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Category of an evidence record.
///
/// The kind determines how a record is cited in suggestion output and which
/// provenance a derived suggestion carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceKind {
    /// A project the user built or maintains.
    Project,
    /// A contribution to someone else's work (reviews, patches, posts).
    Contribution,
}

impl EvidenceKind {
    /// Human-readable label for display output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Contribution => "contribution",
        }
    }
}

/// A single piece of evidence about a user's work.
///
/// Records are intentionally small: a title that names the work and a detail
/// line describing it. Analysis scans both fields for skill terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// What category of work this record describes.
    pub kind: EvidenceKind,
    /// Short name of the work, e.g. a project or repository title.
    pub title: String,
    /// Free-form description of what the work involved.
    pub detail: String,
    /// Seconds since the UNIX epoch when the work was recorded, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<u64>,
}

impl EvidenceRecord {
    /// Create a project record.
    #[must_use]
    pub fn project(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: EvidenceKind::Project,
            title: title.into(),
            detail: detail.into(),
            recorded_at: None,
        }
    }

    /// Create a contribution record.
    #[must_use]
    pub fn contribution(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: EvidenceKind::Contribution,
            title: title.into(),
            detail: detail.into(),
            recorded_at: None,
        }
    }

    /// Attach a recording timestamp (seconds since the UNIX epoch).
    #[must_use]
    pub fn with_recorded_at(mut self, epoch_secs: u64) -> Self {
        self.recorded_at = Some(epoch_secs);
        self
    }

    /// Citation string used in suggestion evidence lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexr_evidence::EvidenceRecord;
    ///
    /// let record = EvidenceRecord::project("Dashboard", "Admin metrics UI");
    /// assert_eq!(record.citation(), "Project \"Dashboard\"");
    ///
    /// let record = EvidenceRecord::contribution("Code review", "Reviewed auth flow");
    /// assert_eq!(record.citation(), "Contribution: Code review");
    /// ```
    #[must_use]
    pub fn citation(&self) -> String {
        match self.kind {
            EvidenceKind::Project => format!("Project \"{}\"", self.title),
            EvidenceKind::Contribution => format!("Contribution: {}", self.title),
        }
    }
}

/// The full body of evidence collected for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceCorpus {
    /// Records in collection order.
    pub records: Vec<EvidenceRecord>,
}

impl EvidenceCorpus {
    /// Create a corpus from a list of records.
    #[must_use]
    pub fn new(records: Vec<EvidenceRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the corpus holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &EvidenceRecord> {
        self.records.iter()
    }
}

/// Load a corpus from a JSON export on disk.
///
/// The file format is the serde representation of [`EvidenceCorpus`]:
/// an object with a `records` array.
pub fn load_corpus(path: &Path) -> anyhow::Result<EvidenceCorpus> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read evidence file {}", path.display()))?;
    let corpus: EvidenceCorpus = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse evidence file {}", path.display()))?;
    Ok(corpus)
}
