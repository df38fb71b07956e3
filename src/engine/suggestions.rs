//! Rule-based improvement suggestions derived from missing skills

use crate::engine::vocabulary::SkillTag;

/// A predicate-to-message mapping: the rule fires when any of its trigger
/// tags is missing from the profile.
#[derive(Debug, Clone)]
pub struct SuggestionRule {
    triggers: Vec<SkillTag>,
    message: String,
}

impl SuggestionRule {
    pub fn new<I>(triggers: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = SkillTag>,
    {
        Self {
            triggers: triggers.into_iter().collect(),
            message: message.into(),
        }
    }

    fn fires(&self, missing: &[SkillTag]) -> bool {
        missing.iter().any(|tag| self.triggers.contains(tag))
    }
}

/// An ordered rule set. Every firing rule contributes its message exactly
/// once, in declaration order; when nothing fires the fallback suggestions
/// are returned instead, so the output is never empty.
#[derive(Debug, Clone)]
pub struct SuggestionRules {
    rules: Vec<SuggestionRule>,
    fallbacks: Vec<String>,
}

impl SuggestionRules {
    pub fn new(rules: Vec<SuggestionRule>, fallbacks: Vec<String>) -> Self {
        assert!(
            !fallbacks.is_empty(),
            "suggestion rule set requires at least one fallback message"
        );
        Self { rules, fallbacks }
    }

    pub fn suggest(&self, missing: &[SkillTag]) -> Vec<String> {
        let fired: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| rule.fires(missing))
            .map(|rule| rule.message.clone())
            .collect();

        if fired.is_empty() {
            self.fallbacks.clone()
        } else {
            fired
        }
    }
}

impl Default for SuggestionRules {
    fn default() -> Self {
        let tag = SkillTag::from;
        Self::new(
            vec![
                SuggestionRule::new(
                    [tag("Docker"), tag("Kubernetes")],
                    "Add containerization experience to your profile (even personal projects using Docker count).",
                ),
                SuggestionRule::new(
                    [tag("AWS")],
                    "Get the AWS Cloud Practitioner certification: studying for it is free and it adds real weight to your profile.",
                ),
                SuggestionRule::new(
                    [tag("CI/CD")],
                    "Mention GitHub Actions or any CI/CD pipeline you have used in your projects.",
                ),
                SuggestionRule::new(
                    [tag("Agile/Scrum")],
                    "Add \"Agile methodology\" or \"Scrum\" to your experience entries if you have worked that way.",
                ),
            ],
            vec![
                "Tailor your profile headline to the technologies most relevant to this posting.".to_string(),
                "Mention the company by name in the first paragraph of your About section to boost relevance.".to_string(),
            ],
        )
    }
}
