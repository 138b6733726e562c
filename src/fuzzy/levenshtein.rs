// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! Both functions compare case-folded characters, so `distance("React",
//! "react")` is 0. The recurrence is the classic one over a
//! `(|a|+1) x (|b|+1)` table, stored two rows at a time.
//!
//! The bounded variant exploits two lower bounds:
//! - `|len(a) - len(b)|` never exceeds the edit distance, so a large length
//!   gap rejects without touching the table.
//! - Row minima never decrease, so once a whole row exceeds the limit the
//!   final cell will too.
//!
//! Neither shortcut changes the answer; `distance_within(a, b, k)` is
//! `Some(distance(a, b))` exactly when `distance(a, b) <= k`.

use crate::util::normalize::fold_case;

/// Levenshtein distance between the case-folded forms of `a` and `b`.
///
/// Minimum number of single-character insertions, deletions and
/// substitutions. Symmetric, zero only for equal folded strings, and obeys
/// the triangle inequality.
///
/// ```
/// use typeahead::distance;
///
/// assert_eq!(distance("reakt", "React"), 1);
/// assert_eq!(distance("kitten", "sitting"), 3);
/// assert_eq!(distance("", "abc"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = fold_case(a).chars().collect();
    let b: Vec<char> = fold_case(b).chars().collect();
    table_distance(&a, &b, usize::MAX).unwrap_or(usize::MAX)
}

/// Are these strings within `max` edits of each other? If so, how many?
///
/// Returns the exact distance when it is at most `max`, `None` otherwise.
///
/// ```
/// use typeahead::distance_within;
///
/// assert_eq!(distance_within("reakt", "react", 2), Some(1));
/// assert_eq!(distance_within("xxxxx", "react", 2), None);
/// ```
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = fold_case(a).chars().collect();
    let b: Vec<char> = fold_case(b).chars().collect();

    // Early-exit: length difference is a lower bound on edit distance
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    table_distance(&a, &b, max)
}

/// Two-row Wagner-Fischer over pre-folded characters.
///
/// Abandons with `None` once a full row exceeds `max`.
fn table_distance(a: &[char], b: &[char], max: usize) -> Option<usize> {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut min_row = curr[0];

        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution or match
            min_row = min_row.min(curr[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let result = prev[b.len()];
    (result <= max).then_some(result)
}
