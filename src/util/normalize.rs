// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding for term identity.
//!
//! A term's identity is its case-folded form. Folding is done one character
//! at a time (`char::to_lowercase`), never through `str::to_lowercase`, so the
//! trie, the edit distance, and the highlighter all agree on what "equal
//! ignoring case" means. `str::to_lowercase` applies context rules (final
//! sigma) that a per-character comparison cannot reproduce.

/// Fold a string for lookup: every char lowercased independently.
///
/// ```
/// use typeahead::fold_case;
///
/// assert_eq!(fold_case("Node.JS"), "node.js");
/// assert_eq!(fold_case("ΣΟΦΟΣ"), "σοφοσ");
/// ```
pub fn fold_case(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Trim surrounding whitespace, then fold. This is the query normal form.
pub fn normalize_query(query: &str) -> String {
    fold_case(query.trim())
}

/// Case-insensitive equality of two characters under `fold_case`.
#[inline]
pub fn chars_eq_folded(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Number of characters (not bytes) in `value`.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
