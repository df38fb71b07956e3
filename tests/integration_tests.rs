//! End-to-end tests for the compatibility engine

use jobfit::{CandidateProfile, CompatibilityEngine, MatchLevel, SkillTag};

fn engine() -> CompatibilityEngine {
    CompatibilityEngine::default()
}

#[test]
fn test_report_invariants_hold_for_varied_inputs() {
    let engine = engine();
    let profile = CandidateProfile::default();

    let mut postings: Vec<String> = jobfit::samples::SAMPLE_POSTINGS
        .iter()
        .map(|s| s.text.to_string())
        .collect();
    postings.push(String::new());
    postings.push("completely unrelated prose about nothing in particular".to_string());
    postings.push("React react REACT docker".to_string());

    for posting in &postings {
        let report = engine.analyze(posting, &profile);

        assert!(report.match_percent <= 100);
        assert!(!report.suggestions.is_empty());
        for tag in &report.matched_skills {
            assert!(
                !report.missing_skills.contains(tag),
                "{} appears in both partitions",
                tag
            );
        }
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let engine = engine();
    let profile = CandidateProfile::default();
    let posting = jobfit::samples::SAMPLE_POSTINGS[1].text;

    let first = engine.analyze(posting, &profile);
    let second = engine.analyze(posting, &profile);
    assert_eq!(first, second);

    let first = engine.analyze_detailed(posting, &profile);
    let second = engine.analyze_detailed(posting, &profile);
    assert_eq!(first, second);
}

#[test]
fn test_zero_requirement_posting_gets_neutral_score() {
    let engine = engine();
    let posting = "We are hiring a passionate individual to join our growing company.";

    let report = engine.analyze(posting, &CandidateProfile::default());

    assert_eq!(report.match_percent, 80);
    assert!(report.matched_skills.is_empty());
    assert!(report.missing_skills.is_empty());
    // Nothing was missing, so the generic fallback suggestions apply.
    assert_eq!(report.suggestions.len(), 2);
    assert!(report.suggestions[0].contains("headline"));
}

#[test]
fn test_reference_partition_and_score() {
    let engine = engine();
    let profile = CandidateProfile::new([SkillTag::from("React"), SkillTag::from("TypeScript")]);

    let report = engine.analyze("React, TypeScript, Docker, AWS, Kubernetes", &profile);

    assert_eq!(
        report.matched_skills,
        vec![SkillTag::from("React"), SkillTag::from("TypeScript")]
    );
    assert_eq!(
        report.missing_skills,
        vec![
            SkillTag::from("Docker"),
            SkillTag::from("AWS"),
            SkillTag::from("Kubernetes"),
        ]
    );
    assert_eq!(report.match_percent, 40); // round(2/5 * 100)
    assert_eq!(report.match_level, MatchLevel::Low);
}

#[test]
fn test_full_overlap_never_exceeds_cap() {
    let engine = engine();
    let report = engine.analyze("React and TypeScript only.", &CandidateProfile::default());

    assert!(report.missing_skills.is_empty());
    assert_eq!(report.match_percent, 95);
    assert_eq!(report.match_level, MatchLevel::High);
}

#[test]
fn test_container_suggestion_not_duplicated() {
    let engine = engine();
    let report = engine.analyze("Docker and Kubernetes required.", &CandidateProfile::default());

    assert_eq!(
        report.missing_skills,
        vec![SkillTag::from("Docker"), SkillTag::from("Kubernetes")]
    );
    let container_hits = report
        .suggestions
        .iter()
        .filter(|s| s.contains("containerization"))
        .count();
    assert_eq!(container_hits, 1);
}

#[test]
fn test_matching_is_case_insensitive() {
    let engine = engine();
    let profile = CandidateProfile::default();

    let upper = engine.analyze("We need REACT experience.", &profile);
    let lower = engine.analyze("We need react experience.", &profile);
    let canonical = engine.analyze("We need React experience.", &profile);

    assert_eq!(upper, lower);
    assert_eq!(lower, canonical);
    assert!(canonical.matched_skills.contains(&SkillTag::from("React")));
}

#[test]
fn test_sample_posting_end_to_end() {
    let engine = engine();
    let profile = CandidateProfile::default();

    // Tech Lead sample: heavy on containers, AWS and CI/CD the demo
    // profile does not have.
    let report = engine.analyze(jobfit::samples::SAMPLE_POSTINGS[1].text, &profile);

    assert!(report.missing_skills.contains(&SkillTag::from("Docker")));
    assert!(report.missing_skills.contains(&SkillTag::from("Kubernetes")));
    assert!(report.matched_skills.contains(&SkillTag::from("React")));
    assert!(report.suggestions.iter().any(|s| s.contains("AWS")));
    assert!(report.suggestions.iter().any(|s| s.contains("CI/CD")));
}
