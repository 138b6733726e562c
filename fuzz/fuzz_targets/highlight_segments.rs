// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlight segments.
//!
//! Segments are cut from the display word by byte offsets found through a
//! case-insensitive char comparison. Any mismatch between the two would
//! either panic on a char boundary or lose text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeahead::{coalesce, highlight_fuzzy, highlight_prefix, highlight_tagged, segments_text};

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    word: String,
    query: String,
    tag: String,
}

fuzz_target!(|input: HighlightInput| {
    let word: String = input.word.chars().take(64).collect();
    let query: String = input.query.chars().take(32).collect();

    // INVARIANT 1: prefix mode is lossless
    let prefix = highlight_prefix(&word, &query);
    assert_eq!(segments_text(&prefix), word);
    assert!(prefix.len() == 1 || prefix.len() == 3);

    // INVARIANT 2: fuzzy mode is lossless, one segment per char
    let fuzzy = highlight_fuzzy(&word, &query);
    assert_eq!(segments_text(&fuzzy), word);
    assert_eq!(fuzzy.len(), word.chars().count());

    // INVARIANT 3: any tag renders, known or not
    assert_eq!(segments_text(&highlight_tagged(&word, &input.tag, &query)), word);

    // INVARIANT 4: coalescing keeps the text
    assert_eq!(segments_text(&coalesce(fuzzy)), word);
});
