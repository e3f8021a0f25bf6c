//! Applying accepted suggestions to a profile in one step.

use crate::types::{SkillSet, SkillSuggestion};

/// Result of committing accepted suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The profile after the commit: previous skills plus accepted ones.
    pub skills: SkillSet,
    /// Names actually added to the profile, in acceptance order.
    pub committed: Vec<String>,
    /// Suggestions left for review, with accepted entries removed.
    pub remaining: Vec<SkillSuggestion>,
}

/// Merge accepted suggestion names into the profile and shrink the batch.
///
/// The inputs are not mutated; the caller swaps in the returned state, so
/// a commit is observed either entirely or not at all. Accepting nothing
/// returns the profile and batch unchanged. Accepted names already on the
/// profile are not double-added and are not reported as committed.
#[must_use]
pub fn commit(
    current: &SkillSet,
    accepted: &[String],
    batch: Vec<SkillSuggestion>,
) -> CommitOutcome {
    let mut skills = current.clone();
    let mut committed = Vec::new();
    for name in accepted {
        if skills.insert(name.clone()) {
            committed.push(name.clone());
        }
    }

    let remaining = batch
        .into_iter()
        .filter(|suggestion| {
            !accepted
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&suggestion.skill))
        })
        .collect();

    CommitOutcome {
        skills,
        committed,
        remaining,
    }
}


/// Property-based tests for the commit partition.
#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::types::{Confidence, SuggestionSource};
    use proptest::prelude::*;

    fn arb_names(max: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z]{1,10}", 0..max)
    }

    proptest! {
        /// Property: every batch entry ends up either committed onto the
        /// profile or still in the remaining batch, never both.
        #[test]
        fn batch_partitions_cleanly(
            batch_names in arb_names(12),
            accepted_from in arb_names(6),
        ) {
            let batch: Vec<SkillSuggestion> = batch_names
                .iter()
                .map(|name| SkillSuggestion {
                    skill: name.clone(),
                    confidence: Confidence::new(50),
                    source: SuggestionSource::Project,
                    evidence: vec![],
                })
                .collect();
            let outcome = commit(&SkillSet::new(), &accepted_from, batch);

            for suggestion in &outcome.remaining {
                prop_assert!(
                    !accepted_from.iter().any(|n| n.eq_ignore_ascii_case(&suggestion.skill)),
                    "accepted name {} still in batch",
                    suggestion.skill
                );
            }
            for name in &outcome.committed {
                prop_assert!(outcome.skills.contains(name));
            }
        }

        /// Property: the profile only grows, never loses skills.
        #[test]
        fn profile_never_shrinks(
            existing in arb_names(8),
            accepted in arb_names(6),
        ) {
            let current = SkillSet::from_names(existing.clone());
            let outcome = commit(&current, &accepted, vec![]);
            for name in &existing {
                prop_assert!(outcome.skills.contains(name));
            }
            prop_assert!(outcome.skills.len() >= current.len());
        }
    }
}
