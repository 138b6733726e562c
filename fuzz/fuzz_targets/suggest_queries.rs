// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end suggestions.
//!
//! Arbitrary vocabularies and queries through the full engine: no panics,
//! no duplicate terms, never more than the cap, ranked order, and lossless
//! highlights for every candidate.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use typeahead::{compare_candidates, frequency_table, highlight, segments_text, SuggestionEngine};

#[derive(Debug, Arbitrary)]
struct SuggestInput {
    vocabulary: Vec<String>,
    frequencies: Vec<(String, u16)>,
    query: String,
    cap: u8,
}

fuzz_target!(|input: SuggestInput| {
    let vocabulary: Vec<String> = input
        .vocabulary
        .into_iter()
        .take(200)
        .map(|w| w.chars().take(32).collect())
        .collect();
    let query: String = input.query.chars().take(32).collect();
    let cap = usize::from(input.cap % 32);
    let frequencies: HashMap<String, u64> =
        frequency_table(input.frequencies.into_iter().map(|(t, n)| (t, u64::from(n))));

    let engine = SuggestionEngine::new(vocabulary);
    let results = engine.suggest_top(&query, cap, &frequencies);

    // INVARIANT 1: cap respected
    assert!(results.len() <= cap);

    // INVARIANT 2: no duplicate terms
    let unique: HashSet<_> = results.iter().map(|c| c.normalized_word.as_str()).collect();
    assert_eq!(unique.len(), results.len());

    // INVARIANT 3: ranked
    for pair in results.windows(2) {
        assert_ne!(compare_candidates(&pair[0], &pair[1]), Ordering::Greater);
    }

    // INVARIANT 4: highlights are lossless
    for candidate in &results {
        assert_eq!(segments_text(&highlight(candidate, &query)), candidate.word);
    }
});
