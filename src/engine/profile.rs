//! Candidate profile: the skill set a posting is scored against

use crate::engine::vocabulary::SkillTag;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of skills a candidate is known to possess.
///
/// `implicit_skills` holds ubiquitous baseline skills (version control,
/// basic API literacy) treated as held regardless of the declared set, so
/// candidates are not penalized for skills almost everyone has. It is part
/// of profile construction, not classifier behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    skills: HashSet<SkillTag>,
    #[serde(default)]
    implicit_skills: HashSet<SkillTag>,
}

impl CandidateProfile {
    pub fn new<I>(skills: I) -> Self
    where
        I: IntoIterator<Item = SkillTag>,
    {
        Self {
            skills: skills.into_iter().collect(),
            implicit_skills: HashSet::new(),
        }
    }

    pub fn with_implicit_skills<I>(mut self, implicit: I) -> Self
    where
        I: IntoIterator<Item = SkillTag>,
    {
        self.implicit_skills = implicit.into_iter().collect();
        self
    }

    /// True when the candidate holds the skill, explicitly or implicitly.
    pub fn holds(&self, tag: &SkillTag) -> bool {
        self.skills.contains(tag) || self.implicit_skills.contains(tag)
    }

    pub fn skills(&self) -> &HashSet<SkillTag> {
        &self.skills
    }

    pub fn implicit_skills(&self) -> &HashSet<SkillTag> {
        &self.implicit_skills
    }
}

impl Default for CandidateProfile {
    /// The demo profile the original product always scored against.
    fn default() -> Self {
        let skills = [
            "React",
            "TypeScript",
            "Node.js",
            "SQL",
            "Git",
            "REST API",
            "HTML",
            "CSS",
            "JavaScript",
        ]
        .into_iter()
        .map(SkillTag::from);

        Self::new(skills).with_implicit_skills(["Git", "REST API"].into_iter().map(SkillTag::from))
    }
}
