//! Compatibility score calculation

use serde::{Deserialize, Serialize};

/// Round-half-up integer percentage; callers guarantee `total > 0`.
pub(crate) fn round_percent(matched: usize, total: usize) -> u8 {
    debug_assert!(total > 0);
    let matched = matched as u32;
    let total = total as u32;
    ((matched * 200 + total) / (total * 2)) as u8
}

/// Scoring policy constants.
///
/// `neutral_score` is returned when a posting matched no vocabulary pattern
/// at all: a keyword-sparse posting should not read as a total mismatch.
/// `max_percent` caps the score below 100 so a perfect keyword overlap never
/// implies a guaranteed fit. Both are product choices surfaced here as
/// configuration rather than buried constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub neutral_score: u8,
    pub max_percent: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            neutral_score: 80,
            max_percent: 95,
        }
    }
}

impl ScoringPolicy {
    /// Convert matched/total counts into a bounded percentage.
    pub fn score(&self, matched_count: usize, total_count: usize) -> u8 {
        if total_count == 0 {
            return self.neutral_score;
        }
        round_percent(matched_count, total_count).min(self.max_percent)
    }
}
