// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded variant takes two shortcuts (length gap, row minimum). Either
//! one firing wrongly would silently drop fuzzy suggestions, so check it
//! against the unbounded distance for arbitrary strings and limits.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeahead::{distance, distance_within};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths (in chars) to avoid timeouts
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();
    let max = usize::from(input.max % 8);

    let d = distance(&a, &b);

    // INVARIANT 1: bounded agrees with unbounded
    let expected = if d <= max { Some(d) } else { None };
    assert_eq!(distance_within(&a, &b, max), expected, "{a:?} vs {b:?} max {max}");

    // INVARIANT 2: symmetry
    assert_eq!(d, distance(&b, &a));

    // INVARIANT 3: bounded by the longer length
    assert!(d <= a.chars().count().max(b.chars().count()));
});
