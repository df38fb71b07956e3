//! Compatibility engine: the single pipeline from posting text to report

use crate::engine::classifier::{classify, Classification};
use crate::engine::extractor::{extract, Extraction};
use crate::engine::profile::CandidateProfile;
use crate::engine::scoring::{round_percent, ScoringPolicy};
use crate::engine::suggestions::SuggestionRules;
use crate::engine::vocabulary::{SkillCategory, SkillTag, Vocabulary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative compatibility band, used by callers to pick labels and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    High,
    Moderate,
    Low,
}

impl MatchLevel {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            80..=u8::MAX => MatchLevel::High,
            60..=79 => MatchLevel::Moderate,
            _ => MatchLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::High => "High compatibility",
            MatchLevel::Moderate => "Moderate compatibility",
            MatchLevel::Low => "Low compatibility",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The engine's single externally visible result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub match_percent: u8,
    pub match_level: MatchLevel,
    pub matched_skills: Vec<SkillTag>,
    pub missing_skills: Vec<SkillTag>,
    pub suggestions: Vec<String>,
}

/// Matched/total tally for one skill category present in the extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: SkillCategory,
    pub matched: usize,
    pub total: usize,
    pub percent: u8,
}

/// Core report plus the per-category sub-score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedReport {
    #[serde(flatten)]
    pub report: CompatibilityReport,
    pub category_scores: Vec<CategoryScore>,
}

/// Stateless compatibility engine over an immutable vocabulary, scoring
/// policy and suggestion rule set. Construct once and share freely; every
/// call only reads the shared inputs and allocates fresh outputs.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    vocabulary: Vocabulary,
    policy: ScoringPolicy,
    rules: SuggestionRules,
}

impl CompatibilityEngine {
    pub fn new(vocabulary: Vocabulary, policy: ScoringPolicy, rules: SuggestionRules) -> Self {
        Self {
            vocabulary,
            policy,
            rules,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Analyze a posting against a candidate profile.
    pub fn analyze(&self, posting_text: &str, profile: &CandidateProfile) -> CompatibilityReport {
        let extraction = extract(posting_text, &self.vocabulary);
        let classification = classify(&extraction, profile);
        let match_percent = self
            .policy
            .score(classification.matched.len(), extraction.len());
        let suggestions = self.rules.suggest(&classification.missing);

        aggregate(&extraction, classification, match_percent, suggestions)
    }

    /// Analyze a posting and additionally report per-category sub-scores.
    pub fn analyze_detailed(
        &self,
        posting_text: &str,
        profile: &CandidateProfile,
    ) -> DetailedReport {
        let extraction = extract(posting_text, &self.vocabulary);
        let classification = classify(&extraction, profile);
        let match_percent = self
            .policy
            .score(classification.matched.len(), extraction.len());
        let suggestions = self.rules.suggest(&classification.missing);
        let category_scores = category_breakdown(&extraction, profile);

        DetailedReport {
            report: aggregate(&extraction, classification, match_percent, suggestions),
            category_scores,
        }
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new(
            Vocabulary::default(),
            ScoringPolicy::default(),
            SuggestionRules::default(),
        )
    }
}

/// Assemble the final report and check the data-model invariants. The
/// assertions guard against programming defects in the pipeline; they can
/// never be reached through engine inputs.
fn aggregate(
    extraction: &Extraction,
    classification: Classification,
    match_percent: u8,
    suggestions: Vec<String>,
) -> CompatibilityReport {
    let Classification { matched, missing } = classification;

    assert!(match_percent <= 100, "match percent out of bounds");
    assert!(!suggestions.is_empty(), "suggestions must be non-empty");
    assert_eq!(
        matched.len() + missing.len(),
        extraction.len(),
        "classification must partition the extraction"
    );
    assert!(
        matched.iter().all(|tag| !missing.contains(tag)),
        "matched and missing skills overlap"
    );

    CompatibilityReport {
        match_percent,
        match_level: MatchLevel::from_percent(match_percent),
        matched_skills: matched,
        missing_skills: missing,
        suggestions,
    }
}

/// Tally matched/total per category, in the order categories first appear
/// in the extraction. Categories absent from the posting are omitted.
fn category_breakdown(extraction: &Extraction, profile: &CandidateProfile) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = Vec::new();

    for requirement in extraction.requirements() {
        let held = profile.holds(&requirement.tag);
        match scores
            .iter_mut()
            .find(|s| s.category == requirement.category)
        {
            Some(score) => {
                score.total += 1;
                if held {
                    score.matched += 1;
                }
            }
            None => scores.push(CategoryScore {
                category: requirement.category,
                matched: usize::from(held),
                total: 1,
                percent: 0,
            }),
        }
    }

    for score in &mut scores {
        score.percent = round_percent(score.matched, score.total);
    }

    scores
}
