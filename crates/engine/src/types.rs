//! Core suggestion types shared across the engine.

use serde::{Deserialize, Serialize};

/// Confidence score clamped to the 0..=100 percent range.
///
/// This newtype ensures confidence values are always valid by clamping
/// any input to the valid range during construction.
///
/// # Examples
///
/// ```
/// use nexr_engine::Confidence;
///
/// // Normal values are preserved
/// let c = Confidence::new(75);
/// assert_eq!(c.percent(), 75);
///
/// // Values are clamped to the valid range
/// let high = Confidence::new(140);
/// assert_eq!(high.percent(), 100);
///
/// // Weighted scores arrive as ratios
/// let scored = Confidence::from_ratio(0.705);
/// assert_eq!(scored.percent(), 71);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    /// Highest representable confidence, in percent.
    pub const MAX: u8 = 100;

    /// Create a new Confidence, clamping the value to 0..=100.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    /// Convert a 0.0..=1.0 ratio into a percent score, rounding to the
    /// nearest point. Out-of-range ratios are clamped first.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        let clamped = ratio.clamp(0.0, 1.0);
        Self((clamped * 100.0).round() as u8)
    }

    /// Get the inner percent value.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Create a zero confidence score.
    #[must_use]
    pub fn zero() -> Self {
        Self(0)
    }

    /// Create a full confidence score (100).
    #[must_use]
    pub fn full() -> Self {
        Self(Self::MAX)
    }
}

impl From<u8> for Confidence {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<Confidence> for u8 {
    fn from(conf: Confidence) -> Self {
        conf.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Provenance of a suggestion: the strongest class of evidence behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionSource {
    /// Backed by at least one project record.
    Project,
    /// Backed by contribution records only.
    Contribution,
    /// Inferred from fuzzy or indirect matches with no direct record.
    AiDetected,
}

impl SuggestionSource {
    /// Human-readable label for display output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Contribution => "contribution",
            Self::AiDetected => "ai-detected",
        }
    }
}

/// A single ranked skill the engine believes the user has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSuggestion {
    /// Canonical skill name, e.g. "React" or "API Integration".
    pub skill: String,
    /// How confident the engine is that the skill belongs on the profile.
    pub confidence: Confidence,
    /// Strongest class of evidence behind the suggestion.
    pub source: SuggestionSource,
    /// Citations explaining where the skill was observed.
    pub evidence: Vec<String>,
}

/// The skills currently on a user's profile.
///
/// Membership is case-insensitive ("react" and "React" name the same skill)
/// while the stored spelling is preserved for display. Serializes as a plain
/// array of names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    names: Vec<String>,
}

impl SkillSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from names, dropping case-insensitive duplicates and
    /// keeping the first spelling seen.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name.into());
        }
        set
    }

    /// Whether an equivalent name is already present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Add a skill, preserving its spelling. Returns false when an
    /// equivalent name is already present or the name is blank.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() || self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove a skill by case-insensitive name. Returns true when removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| !n.eq_ignore_ascii_case(name));
        self.names.len() != before
    }

    /// Iterate over stored spellings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Stored spellings in insertion order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of skills in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set holds no skills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.names
    }
}
