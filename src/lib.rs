//! Jobfit library: requirement extraction and compatibility scoring

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod samples;

pub use config::Config;
pub use engine::analyzer::{CompatibilityEngine, CompatibilityReport, DetailedReport, MatchLevel};
pub use engine::profile::CandidateProfile;
pub use engine::vocabulary::{SkillCategory, SkillTag, Vocabulary};
pub use error::{JobfitError, Result};
