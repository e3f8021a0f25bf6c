//! Dedup filtering between suggestion batches and the current profile.

use crate::types::{SkillSet, SkillSuggestion};

/// Drop suggestions for skills the profile already lists.
///
/// Comparison is case-insensitive, matching [`SkillSet`] membership. The
/// relative order of surviving suggestions is preserved, and filtering an
/// already-filtered batch changes nothing.
#[must_use]
pub fn filter_known(
    suggestions: Vec<SkillSuggestion>,
    current: &SkillSet,
) -> Vec<SkillSuggestion> {
    suggestions
        .into_iter()
        .filter(|suggestion| !current.contains(&suggestion.skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, SuggestionSource};

    fn suggestion(skill: &str, confidence: u8) -> SkillSuggestion {
        SkillSuggestion {
            skill: skill.to_string(),
            confidence: Confidence::new(confidence),
            source: SuggestionSource::Project,
            evidence: vec![],
        }
    }

    #[test]
    fn test_known_skills_are_dropped() {
        let current = SkillSet::from_names(["React"]);
        let batch = vec![suggestion("React", 90), suggestion("API Integration", 40)];

        let fresh = filter_known(batch, &current);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].skill, "API Integration");
    }

    #[test]
    fn test_filtering_is_case_insensitive() {
        let current = SkillSet::from_names(["react"]);
        let fresh = filter_known(vec![suggestion("React", 90)], &current);
        assert!(fresh.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let current = SkillSet::from_names(["Testing"]);
        let batch = vec![
            suggestion("React", 90),
            suggestion("Testing", 70),
            suggestion("CI/CD", 40),
        ];

        let fresh = filter_known(batch, &current);
        let names: Vec<&str> = fresh.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, ["React", "CI/CD"]);
    }

    #[test]
    fn test_empty_profile_keeps_everything() {
        let batch = vec![suggestion("React", 90), suggestion("Testing", 40)];
        let fresh = filter_known(batch.clone(), &SkillSet::new());
        assert_eq!(fresh, batch);
    }
}
