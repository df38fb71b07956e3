//! Skill classification: partition extracted requirements against a profile

use crate::engine::extractor::Extraction;
use crate::engine::profile::CandidateProfile;
use crate::engine::vocabulary::SkillTag;
use serde::{Deserialize, Serialize};

/// Total, disjoint partition of the extracted requirements. Both sides
/// preserve extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub matched: Vec<SkillTag>,
    pub missing: Vec<SkillTag>,
}

pub fn classify(extraction: &Extraction, profile: &CandidateProfile) -> Classification {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for tag in extraction.tags() {
        if profile.holds(tag) {
            matched.push(tag.clone());
        } else {
            missing.push(tag.clone());
        }
    }

    Classification { matched, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::extractor::extract;
    use crate::engine::vocabulary::Vocabulary;

    #[test]
    fn test_partition_is_total_and_disjoint() {
        let vocab = Vocabulary::default();
        let extraction = extract("React, TypeScript, Docker and Redis", &vocab);
        let profile = CandidateProfile::new([SkillTag::from("React"), SkillTag::from("TypeScript")]);

        let classification = classify(&extraction, &profile);

        assert_eq!(
            classification.matched.len() + classification.missing.len(),
            extraction.len()
        );
        for tag in &classification.matched {
            assert!(!classification.missing.contains(tag));
        }
    }

    #[test]
    fn test_implicit_skills_land_in_matched() {
        let vocab = Vocabulary::default();
        let extraction = extract("git and restful services", &vocab);
        let profile = CandidateProfile::new([]).with_implicit_skills([
            SkillTag::from("Git"),
            SkillTag::from("REST API"),
        ]);

        let classification = classify(&extraction, &profile);
        assert!(classification.matched.contains(&SkillTag::from("Git")));
        assert!(classification.matched.contains(&SkillTag::from("REST API")));
        assert!(classification.missing.is_empty());
    }

    #[test]
    fn test_empty_extraction_yields_empty_partition() {
        let classification = classify(&Extraction::default(), &CandidateProfile::default());
        assert!(classification.matched.is_empty());
        assert!(classification.missing.is_empty());
    }

    #[test]
    fn test_order_preserved_from_extraction() {
        let vocab = Vocabulary::default();
        let extraction = extract("Kubernetes, Docker, AWS", &vocab);
        let profile = CandidateProfile::new([]);

        let classification = classify(&extraction, &profile);
        // Vocabulary declares Docker before AWS before Kubernetes.
        assert_eq!(
            classification.missing,
            vec![
                SkillTag::from("Docker"),
                SkillTag::from("AWS"),
                SkillTag::from("Kubernetes"),
            ]
        );
    }
}
