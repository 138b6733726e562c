// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate ranking: how suggestions get sorted.
//!
//! The ranking is bucketed by category, not by raw score. A prefix match with
//! score 5000 still sorts after an exact match with score 10000, and after an
//! exact match with any score at all.
//!
//! Bucket hierarchy: ExactQueryMatch > PrefixMatch > FuzzyMatch

use crate::types::Candidate;
use std::cmp::Ordering;

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Category** - bucket hierarchy dominates
/// 2. **Score** - only within the same bucket (higher wins)
/// 3. **Edit distance** - fuzzy candidates with equal score, fewer edits first
/// 4. **Word** - case-sensitive ascending, so output is deterministic
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| {
            if a.is_fuzzy() && b.is_fuzzy() {
                a.edit_distance.cmp(&b.edit_distance)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.word.cmp(&b.word))
}

/// Sort candidates best first.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(compare_candidates);
}
