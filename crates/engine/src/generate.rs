//! Suggestion generation: scanning evidence for lexicon terms and ranking
//! the results.
//!
//! Matching runs in three layers per record and term:
//! - exact term or alias in the record title
//! - exact term or alias in the record detail
//! - trigram similarity against individual words (fuzzy)
//!
//! Accumulated signals are folded into a confidence score by a
//! [`RankingPolicy`], so ranking behavior can be swapped without touching
//! the matching layer.

use std::collections::HashMap;

use trigram::similarity;

use nexr_evidence::{EvidenceCorpus, EvidenceKind, EvidenceRecord};

use crate::lexicon::{SkillLexicon, TermSpec};
use crate::types::{Confidence, SkillSuggestion, SuggestionSource};

/// Weights for match signal classes.
const TITLE_PROJECT_WEIGHT: f64 = 0.45;
const TITLE_CONTRIBUTION_WEIGHT: f64 = 0.35;
const DETAIL_PROJECT_WEIGHT: f64 = 0.30;
const DETAIL_CONTRIBUTION_WEIGHT: f64 = 0.25;
const FUZZY_MATCH_WEIGHT: f64 = 0.20;
const RECURRENCE_WEIGHT: f64 = 0.10;
const IMPLIED_BASE_WEIGHT: f64 = 0.25;
const IMPLIED_SUPPORT_WEIGHT: f64 = 0.10;

/// Distinct supporting terms required before an implied skill surfaces.
const MIN_IMPLY_SUPPORT: usize = 2;

/// Default trigram similarity needed for a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Default floor below which suggestions are dropped, in percent.
pub const DEFAULT_MIN_CONFIDENCE: u8 = 5;

/// One piece of evidence that a term applies to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSignal {
    /// Term or alias appeared in a record title.
    TitleMatch {
        /// Kind of the matching record.
        kind: EvidenceKind,
    },
    /// Term or alias appeared in a record detail.
    DetailMatch {
        /// Kind of the matching record.
        kind: EvidenceKind,
    },
    /// A word in the record resembled the term without matching exactly.
    FuzzyMatch {
        /// Best trigram similarity observed, in 0.0..=1.0.
        similarity: f64,
    },
    /// The term matched more than one record.
    Recurrence {
        /// Number of records that matched.
        records: u64,
    },
    /// The skill was implied by other matched terms.
    ImpliedBy {
        /// Canonical names of the supporting terms.
        supporters: Vec<String>,
    },
}

/// Strategy for folding a term's signals into a confidence score.
pub trait RankingPolicy: Send + Sync {
    /// Compute the confidence for one candidate skill.
    fn confidence(&self, signals: &[MatchSignal]) -> Confidence;
}

/// Default policy: a weighted sum of signals, clamped into percent range.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedPolicy;

impl RankingPolicy for WeightedPolicy {
    fn confidence(&self, signals: &[MatchSignal]) -> Confidence {
        let mut ratio = 0.0f64;
        for signal in signals {
            match signal {
                MatchSignal::TitleMatch { kind } => {
                    ratio += match kind {
                        EvidenceKind::Project => TITLE_PROJECT_WEIGHT,
                        EvidenceKind::Contribution => TITLE_CONTRIBUTION_WEIGHT,
                    };
                }
                MatchSignal::DetailMatch { kind } => {
                    ratio += match kind {
                        EvidenceKind::Project => DETAIL_PROJECT_WEIGHT,
                        EvidenceKind::Contribution => DETAIL_CONTRIBUTION_WEIGHT,
                    };
                }
                MatchSignal::FuzzyMatch { similarity } => {
                    ratio += FUZZY_MATCH_WEIGHT * similarity;
                }
                MatchSignal::Recurrence { records } => {
                    // Logarithmic scaling so a long tail of records does not
                    // dominate the direct match weights.
                    if *records >= 2 {
                        ratio += RECURRENCE_WEIGHT * ((*records + 1) as f64).log2();
                    }
                }
                MatchSignal::ImpliedBy { supporters } => {
                    if !supporters.is_empty() {
                        ratio += IMPLIED_BASE_WEIGHT
                            + IMPLIED_SUPPORT_WEIGHT * (supporters.len() as f64 - 1.0);
                    }
                }
            }
        }
        Confidence::from_ratio(ratio)
    }
}

/// Accumulated state for one candidate skill during a generation pass.
#[derive(Debug)]
struct Candidate {
    skill: String,
    signals: Vec<MatchSignal>,
    evidence: Vec<String>,
    records_matched: u64,
    has_project: bool,
    has_contribution: bool,
    first_seen: usize,
}

impl Candidate {
    fn new(skill: String, first_seen: usize) -> Self {
        Self {
            skill,
            signals: Vec::new(),
            evidence: Vec::new(),
            records_matched: 0,
            has_project: false,
            has_contribution: false,
            first_seen,
        }
    }
}

/// Turns an evidence corpus into ranked skill suggestions.
pub struct SuggestionGenerator {
    lexicon: SkillLexicon,
    policy: Box<dyn RankingPolicy>,
    fuzzy_threshold: f64,
    min_confidence: Confidence,
}

impl SuggestionGenerator {
    /// Create a generator over the given lexicon with the default policy.
    #[must_use]
    pub fn new(lexicon: SkillLexicon) -> Self {
        Self {
            lexicon,
            policy: Box::new(WeightedPolicy),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_confidence: Confidence::new(DEFAULT_MIN_CONFIDENCE),
        }
    }

    /// Replace the ranking policy.
    #[must_use]
    pub fn with_policy(mut self, policy: impl RankingPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Override the trigram similarity needed for fuzzy matches.
    #[must_use]
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Override the confidence floor below which suggestions are dropped.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: Confidence) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// The lexicon this generator scans for.
    #[must_use]
    pub fn lexicon(&self) -> &SkillLexicon {
        &self.lexicon
    }

    /// Scan the corpus and produce ranked suggestions.
    ///
    /// Suggestions are sorted by confidence descending; ties keep the order
    /// in which the terms were first observed. An empty corpus yields an
    /// empty batch.
    #[must_use]
    pub fn generate(&self, corpus: &EvidenceCorpus) -> Vec<SkillSuggestion> {
        let mut candidates: HashMap<String, Candidate> = HashMap::new();
        let mut order = 0usize;

        for record in corpus.iter() {
            for term in self.lexicon.terms() {
                let Some(signal) = self.match_record(term, record) else {
                    continue;
                };
                let exact = matches!(
                    signal,
                    MatchSignal::TitleMatch { .. } | MatchSignal::DetailMatch { .. }
                );
                let candidate = candidates
                    .entry(term.name.to_lowercase())
                    .or_insert_with(|| {
                        order += 1;
                        Candidate::new(term.name.clone(), order)
                    });
                if exact {
                    match record.kind {
                        EvidenceKind::Project => candidate.has_project = true,
                        EvidenceKind::Contribution => candidate.has_contribution = true,
                    }
                }
                candidate.signals.push(signal);
                candidate.records_matched += 1;
                let citation = record.citation();
                if !candidate.evidence.contains(&citation) {
                    candidate.evidence.push(citation);
                }
            }
        }

        for candidate in candidates.values_mut() {
            if candidate.records_matched >= 2 {
                candidate.signals.push(MatchSignal::Recurrence {
                    records: candidate.records_matched,
                });
            }
        }

        // Indirect evidence: skills implied by enough directly matched terms.
        let mut implied: Vec<(String, Vec<String>)> = Vec::new();
        for term in self.lexicon.terms() {
            if !candidates.contains_key(&term.name.to_lowercase()) {
                continue;
            }
            for target in &term.implies {
                match implied.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(target)) {
                    Some((_, supporters)) => supporters.push(term.name.clone()),
                    None => implied.push((target.clone(), vec![term.name.clone()])),
                }
            }
        }
        for (target, supporters) in implied {
            if supporters.len() < MIN_IMPLY_SUPPORT {
                continue;
            }
            let citation = format!("Inferred from related skills: {}", supporters.join(", "));
            let candidate = candidates.entry(target.to_lowercase()).or_insert_with(|| {
                order += 1;
                Candidate::new(target.clone(), order)
            });
            candidate.signals.push(MatchSignal::ImpliedBy { supporters });
            candidate.evidence.push(citation);
        }

        let mut ranked: Vec<(usize, SkillSuggestion)> = candidates
            .into_values()
            .filter_map(|candidate| {
                let confidence = self.policy.confidence(&candidate.signals);
                if confidence < self.min_confidence {
                    return None;
                }
                let source = if candidate.has_project {
                    SuggestionSource::Project
                } else if candidate.has_contribution {
                    SuggestionSource::Contribution
                } else {
                    SuggestionSource::AiDetected
                };
                Some((
                    candidate.first_seen,
                    SkillSuggestion {
                        skill: candidate.skill,
                        confidence,
                        source,
                        evidence: candidate.evidence,
                    },
                ))
            })
            .collect();

        ranked.sort_by(|a, b| b.1.confidence.cmp(&a.1.confidence).then(a.0.cmp(&b.0)));
        ranked.into_iter().map(|(_, suggestion)| suggestion).collect()
    }

    /// Strongest signal the term produces against one record, if any.
    fn match_record(&self, term: &TermSpec, record: &EvidenceRecord) -> Option<MatchSignal> {
        if term_in_text(term, &record.title) {
            return Some(MatchSignal::TitleMatch { kind: record.kind });
        }
        if term_in_text(term, &record.detail) {
            return Some(MatchSignal::DetailMatch { kind: record.kind });
        }
        let score =
            fuzzy_term_score(term, &record.title).max(fuzzy_term_score(term, &record.detail));
        if score >= self.fuzzy_threshold {
            return Some(MatchSignal::FuzzyMatch { similarity: score });
        }
        None
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new(SkillLexicon::builtin())
    }
}

impl std::fmt::Debug for SuggestionGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionGenerator")
            .field("terms", &self.lexicon.len())
            .field("fuzzy_threshold", &self.fuzzy_threshold)
            .field("min_confidence", &self.min_confidence)
            .finish_non_exhaustive()
    }
}

/// Split text into words the way evidence prose is scanned: alphanumerics
/// plus hyphens and underscores stay together.
fn text_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '-' && c != '_')
        .filter(|word| !word.is_empty())
}

/// Whether a surface form is a single scan word (no spaces or punctuation).
fn is_plain_word(surface: &str) -> bool {
    !surface.is_empty()
        && surface
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Exact match of one surface form against text. Plain words must match a
/// whole word; multi-word or punctuated surfaces match as substrings.
fn surface_in_text(surface: &str, text_lower: &str) -> bool {
    if surface.trim().is_empty() {
        return false;
    }
    let surface_lower = surface.to_lowercase();
    if is_plain_word(&surface_lower) {
        text_words(text_lower).any(|word| word == surface_lower.as_str())
    } else {
        text_lower.contains(&surface_lower)
    }
}

/// Whether the term's name or any alias appears in the text.
fn term_in_text(term: &TermSpec, text: &str) -> bool {
    let text_lower = text.to_lowercase();
    surface_in_text(&term.name, &text_lower)
        || term.aliases.iter().any(|alias| surface_in_text(alias, &text_lower))
}

/// Best trigram similarity between the term's single-word surfaces and the
/// words of the text.
fn fuzzy_term_score(term: &TermSpec, text: &str) -> f64 {
    std::iter::once(term.name.as_str())
        .chain(term.aliases.iter().map(String::as_str))
        .filter(|surface| is_plain_word(surface) && surface.len() >= 3)
        .map(|surface| best_word_match(surface, text))
        .fold(0.0, f64::max)
}

/// Highest similarity between the needle and any word of the haystack.
fn best_word_match(needle: &str, haystack: &str) -> f64 {
    let needle_lower = needle.to_lowercase();
    text_words(haystack)
        .filter(|word| word.len() >= 3)
        .map(|word| f64::from(similarity(&needle_lower, &word.to_lowercase())))
        .fold(0.0, f64::max)
}
