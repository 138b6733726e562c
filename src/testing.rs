//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Candidate, HighlightSegment, MatchCategory};
use crate::util::normalize::fold_case;

/// Create a candidate with consistent `normalized_word` and `edit_distance`.
///
/// This is the canonical implementation used across all tests. Fuzzy
/// candidates get `distance` (defaulting to 1); the others get none.
pub fn make_candidate(
    word: &str,
    category: MatchCategory,
    score: i64,
    distance: Option<usize>,
) -> Candidate {
    let edit_distance = match category {
        MatchCategory::FuzzyMatch => Some(distance.unwrap_or(1)),
        _ => None,
    };
    Candidate {
        word: word.to_string(),
        normalized_word: fold_case(word),
        category,
        score,
        edit_distance,
    }
}

/// Concatenate the emphasized segment texts.
pub fn marked_text(segments: &[HighlightSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.emphasized)
        .map(|s| s.text.as_str())
        .collect()
}

/// `count` distinct words sharing `prefix`: "a00", "a01", ...
pub fn words_with_prefix(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i:02}")).collect()
}
