//! Score checklist
//!
//! Every checklist tag counts equally. The score is recomputed from the tag
//! set on every call; nothing is cached.

use super::types::MetaTagSet;

/// Tags counted by the score, in evaluation order
pub const CHECKLIST: [&str; 13] = [
    "title",
    "description",
    "og:title",
    "og:description",
    "og:image",
    "og:type",
    "og:url",
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
    "canonical",
    "robots",
];

/// Present/total counts behind a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistTally {
    pub present: usize,
    pub total: usize,
}

impl ChecklistTally {
    /// Percentage rounded half-up, computed in integers
    pub fn percent(&self) -> u8 {
        percent_rounded(self.present, self.total)
    }
}

/// `round(part / whole * 100)` with half-up rounding; 0 when `whole` is 0
pub fn percent_rounded(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    ((part * 200 + whole) / (whole * 2)) as u8
}

/// Count checklist tags present in `tags`
pub fn tally(tags: &MetaTagSet) -> ChecklistTally {
    let present = CHECKLIST.iter().filter(|tag| tags.has(tag)).count();
    ChecklistTally {
        present,
        total: CHECKLIST.len(),
    }
}

/// Percentage score (0-100) for a tag set
pub fn compute_score(tags: &MetaTagSet) -> u8 {
    tally(tags).percent()
}

/// Checklist tags missing from `tags`, in checklist order
pub fn missing_tags(tags: &MetaTagSet) -> Vec<&'static str> {
    CHECKLIST
        .iter()
        .copied()
        .filter(|tag| !tags.has(tag))
        .collect()
}
