//! Requirement extraction: scan a posting against the vocabulary

use crate::engine::vocabulary::{SkillCategory, SkillTag, Vocabulary};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One requirement detected in a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRequirement {
    pub tag: SkillTag,
    pub category: SkillCategory,
}

/// The ordered set of requirements found in a posting, deduplicated by tag.
/// Order follows vocabulary declaration order, not order of appearance in
/// the text, so downstream presentation stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    requirements: Vec<ExtractedRequirement>,
}

impl Extraction {
    pub fn requirements(&self) -> &[ExtractedRequirement] {
        &self.requirements
    }

    pub fn tags(&self) -> impl Iterator<Item = &SkillTag> {
        self.requirements.iter().map(|r| &r.tag)
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

/// Extract the requirements mentioned in `posting_text`.
///
/// The posting is lowercased once and every pattern is tested independently
/// against that normalized copy. Empty text yields an empty extraction.
pub fn extract(posting_text: &str, vocabulary: &Vocabulary) -> Extraction {
    let normalized = posting_text.to_lowercase();
    let mut seen: HashSet<SkillTag> = HashSet::new();
    let mut requirements = Vec::new();

    for pattern in vocabulary.patterns() {
        if pattern.matches(&normalized) && seen.insert(pattern.tag().clone()) {
            requirements.push(ExtractedRequirement {
                tag: pattern.tag().clone(),
                category: pattern.category(),
            });
        }
    }

    Extraction { requirements }
}
