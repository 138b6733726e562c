// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two entry points: the plain Levenshtein distance, and a bounded variant
//! that gives up as soon as the answer is known to exceed the limit. The
//! suggestion engine scans the whole vocabulary with the bounded one.

mod levenshtein;

pub use levenshtein::*;
