//! Static skill vocabulary: canonical tags and the patterns that detect them

use crate::error::{JobfitError, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Canonical skill identifier (e.g. "React", "Docker").
///
/// Equality and hashing are ASCII-case-insensitive on the canonical name, so
/// `SkillTag::from("react") == SkillTag::from("React")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTag(String);

impl SkillTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillTag {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl PartialEq for SkillTag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for SkillTag {}

impl Hash for SkillTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category a vocabulary entry belongs to, used for the per-category
/// sub-score breakdown in detailed reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Stack,
    Seniority,
    SoftSkills,
    AtsKeyword,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillCategory::Stack => "Stack",
            SkillCategory::Seniority => "Seniority",
            SkillCategory::SoftSkills => "Soft Skills",
            SkillCategory::AtsKeyword => "ATS Keywords",
        };
        write!(f, "{}", label)
    }
}

/// A skill tag paired with the case-insensitive detection rule that decides
/// whether a posting mentions it.
#[derive(Debug, Clone)]
pub struct RequirementPattern {
    tag: SkillTag,
    category: SkillCategory,
    pattern: Regex,
}

impl RequirementPattern {
    pub fn new(tag: SkillTag, category: SkillCategory, pattern: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                JobfitError::Configuration(format!("Invalid pattern for '{}': {}", tag, e))
            })?;
        Ok(Self { tag, category, pattern })
    }

    pub fn tag(&self) -> &SkillTag {
        &self.tag
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    /// Test the pattern against already-lowercased posting text.
    pub fn matches(&self, normalized_text: &str) -> bool {
        self.pattern.is_match(normalized_text)
    }
}

/// Immutable ordered list of requirement patterns.
///
/// Declaration order determines presentation order downstream, not matching
/// precedence: every pattern is evaluated independently.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    patterns: Vec<RequirementPattern>,
}

impl Vocabulary {
    pub fn new(patterns: Vec<RequirementPattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[RequirementPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for Vocabulary {
    /// The built-in vocabulary of recognizable requirements.
    fn default() -> Self {
        use SkillCategory::*;

        let table: &[(&str, SkillCategory, &str)] = &[
            ("React", Stack, r"react"),
            ("TypeScript", Stack, r"typescript"),
            ("Node.js", Stack, r"node"),
            ("SQL", Stack, r"sql|postgres|mysql"),
            ("Git", AtsKeyword, r"git"),
            ("REST API", AtsKeyword, r"rest\s*api|restful"),
            ("Docker", Stack, r"docker"),
            ("AWS", Stack, r"aws|amazon"),
            ("Kubernetes", Stack, r"kubernetes|k8s"),
            ("CI/CD", Stack, r"ci/cd|cicd|pipeline"),
            ("GraphQL", Stack, r"graphql"),
            ("Next.js", Stack, r"next\.js|nextjs"),
            ("Agile/Scrum", SoftSkills, r"agile|scrum"),
            ("Testing", AtsKeyword, r"jest|testing|testes"),
            ("MongoDB", Stack, r"mongodb|mongo"),
            ("Redis", Stack, r"redis"),
            ("Microservices", Stack, r"microservice"),
            ("Figma", Stack, r"figma"),
            ("Senior", Seniority, r"senior|s[êe]nior"),
            ("Tech Lead", Seniority, r"tech\s*lead|\blead\b"),
            ("Leadership", SoftSkills, r"leadership|mentoring|mentoria|lideran"),
        ];

        let patterns = table
            .iter()
            .map(|(tag, category, pattern)| {
                RequirementPattern::new(SkillTag::from(*tag), *category, pattern)
                    .expect("built-in vocabulary pattern is valid")
            })
            .collect();

        Self { patterns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_equality_is_case_insensitive() {
        assert_eq!(SkillTag::from("React"), SkillTag::from("REACT"));
        assert_eq!(SkillTag::from("react"), SkillTag::from("React"));
        assert_ne!(SkillTag::from("React"), SkillTag::from("Redis"));
    }

    #[test]
    fn test_tag_hashing_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(SkillTag::from("Docker"));
        assert!(set.contains(&SkillTag::from("docker")));
        assert!(set.contains(&SkillTag::from("DOCKER")));
        assert!(!set.contains(&SkillTag::from("Kubernetes")));
    }

    #[test]
    fn test_default_vocabulary_is_populated() {
        let vocab = Vocabulary::default();
        assert!(!vocab.is_empty());
        assert!(vocab.patterns().iter().any(|p| p.tag() == &SkillTag::from("React")));
    }

    #[test]
    fn test_pattern_alternations() {
        let vocab = Vocabulary::default();
        let sql = vocab
            .patterns()
            .iter()
            .find(|p| p.tag() == &SkillTag::from("SQL"))
            .unwrap();

        assert!(sql.matches("experience with postgres required"));
        assert!(sql.matches("mysql administration"));
        assert!(!sql.matches("no databases here"));
    }

    #[test]
    fn test_invalid_custom_pattern_is_rejected() {
        let result = RequirementPattern::new(SkillTag::from("Broken"), SkillCategory::Stack, r"([");
        assert!(result.is_err());
    }
}
