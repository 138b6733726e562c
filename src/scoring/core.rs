// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion scores.
//!
//! Scores are signed integers. Usage frequency is the base for every
//! category; exact matches add a large fixed bonus, fuzzy matches add a bonus
//! for every unit of edit budget they did not use.
//!
//! # Constants
//!
//! | Constant                 | Value  | Role                                    |
//! |--------------------------|--------|-----------------------------------------|
//! | `EXACT_MATCH_BONUS`      | 10000  | Exact score = frequency + bonus         |
//! | `FUZZY_DISTANCE_WEIGHT`  | 1000   | Fuzzy score = (max - d) * weight + freq |
//! | `MAX_EDIT_DISTANCE`      | 2      | Fuzzy candidates need 0 < d <= max      |
//! | `FUZZY_PREFIX_THRESHOLD` | 5      | Skip fuzzy once this many prefix hits   |
//! | `FUZZY_MIN_QUERY_LEN`    | 3      | Skip fuzzy for shorter queries          |
//! | `DEFAULT_CAP`            | 10     | Result size bound                       |
//!
//! Category is ranked before score (see `ranking`), so these numbers only
//! order candidates within a category.

use crate::config::SuggestConfig;

/// Default maximum number of suggestions.
pub const DEFAULT_CAP: usize = 10;

/// Largest edit distance a fuzzy candidate may have.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Fixed bonus for a vocabulary term equal to the whole query.
pub const EXACT_MATCH_BONUS: i64 = 10_000;

/// Bonus per unit of unused edit budget: distance 1 earns 1000 at max 2.
pub const FUZZY_DISTANCE_WEIGHT: i64 = 1_000;

/// The fuzzy stage runs only while the prefix stage found fewer words.
pub const FUZZY_PREFIX_THRESHOLD: usize = 5;

/// The fuzzy stage runs only for queries of at least this many chars.
/// Shorter queries are within two edits of nearly everything.
pub const FUZZY_MIN_QUERY_LEN: usize = 3;

/// Usage count as a score component, saturating instead of wrapping.
#[inline]
pub fn frequency_score(frequency: u64) -> i64 {
    i64::try_from(frequency).unwrap_or(i64::MAX)
}

/// Score for an exact full-query match.
#[inline]
pub fn exact_score(frequency: u64, config: &SuggestConfig) -> i64 {
    frequency_score(frequency).saturating_add(config.exact_match_bonus)
}

/// Score for a prefix match: usage frequency alone.
#[inline]
pub fn prefix_score(frequency: u64) -> i64 {
    frequency_score(frequency)
}

/// Score for a fuzzy match at `distance` edits.
///
/// `(max_edit_distance - distance) * weight + frequency`. Distance 1 at the
/// default settings earns 1000 on top of frequency, distance 2 earns nothing.
#[inline]
pub fn fuzzy_score(distance: usize, frequency: u64, config: &SuggestConfig) -> i64 {
    let unused = config.max_edit_distance.saturating_sub(distance);
    let unused = i64::try_from(unused).unwrap_or(i64::MAX);
    unused
        .saturating_mul(config.fuzzy_distance_weight)
        .saturating_add(frequency_score(frequency))
}
