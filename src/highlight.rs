// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight spans: why did this candidate match?
//!
//! Two algorithms, picked by category:
//!
//! - **Exact/prefix**: find the first case-insensitive occurrence of the query
//!   in the display word and emphasize exactly that span. Output is always
//!   three segments `[before, match, after]`, any of which may be empty.
//!
//! - **Fuzzy**: a greedy left-to-right walk with one cursor per string.
//!   Aligned equal characters stay plain; everything else in the candidate is
//!   emphasized. Output is one segment per character of the candidate.
//!
//! The fuzzy walk is greedy, not an edit-distance traceback. When the query
//! drops a leading character (`ocker` for `docker`) the cursors never realign
//! and every character ends up emphasized, though one deletion explains it.
//! Scoring uses plain distance without alignment, so the two layers agree
//! about not knowing the edit path.
//!
//! **Invariant**: `segments_text(&highlight(c, q)) == c.word` for every
//! candidate and every query. Segments are cut on char boundaries of the
//! display word, never of a folded copy.
//!
//! **Verified by**:
//! - `prop_highlight_is_lossless` (tests/property/highlight_props.rs)
//! - `prop_suggest_highlights_are_lossless` (tests/property/suggest_props.rs)

use crate::types::{Candidate, HighlightSegment, MatchCategory};
use crate::util::normalize::chars_eq_folded;

/// Segments for a candidate returned by `suggest`, against the raw query.
pub fn highlight(candidate: &Candidate, query: &str) -> Vec<HighlightSegment> {
    highlight_as(&candidate.word, candidate.category, query)
}

/// Segments for `word` as if it had matched in `category`.
pub fn highlight_as(word: &str, category: MatchCategory, query: &str) -> Vec<HighlightSegment> {
    match category {
        MatchCategory::ExactQueryMatch | MatchCategory::PrefixMatch => highlight_prefix(word, query),
        MatchCategory::FuzzyMatch => highlight_fuzzy(word, query),
    }
}

/// Segments for a category given as a string tag by an outer layer.
///
/// An unrecognized tag still renders: the whole word as one plain segment.
pub fn highlight_tagged(word: &str, tag: &str, query: &str) -> Vec<HighlightSegment> {
    match tag.parse::<MatchCategory>() {
        Ok(category) => highlight_as(word, category, query),
        Err(_) => vec![HighlightSegment::plain(word)],
    }
}

/// Emphasize the first case-insensitive occurrence of `query` in `word`.
///
/// ```
/// use typeahead::highlight_prefix;
///
/// let segments = highlight_prefix("Docker", "doc");
/// assert_eq!(segments[0].text, "");
/// assert_eq!(segments[1].text, "Doc");
/// assert!(segments[1].emphasized);
/// assert_eq!(segments[2].text, "ker");
/// ```
pub fn highlight_prefix(word: &str, query: &str) -> Vec<HighlightSegment> {
    let query: Vec<char> = query.trim().chars().collect();
    let Some((start, end)) = find_folded(word, &query) else {
        // Not a substring at all; render the word untouched
        return vec![HighlightSegment::plain(word)];
    };

    vec![
        HighlightSegment::plain(&word[..start]),
        HighlightSegment::emphasized(&word[start..end]),
        HighlightSegment::plain(&word[end..]),
    ]
}

/// Emphasize candidate characters that the greedy walk cannot align with
/// the query.
///
/// ```
/// use typeahead::{highlight_fuzzy, segments_text};
///
/// let segments = highlight_fuzzy("React", "reakt");
/// let marked: String = segments.iter().filter(|s| s.emphasized).map(|s| s.text.as_str()).collect();
/// assert_eq!(marked, "c");
/// assert_eq!(segments_text(&segments), "React");
/// ```
pub fn highlight_fuzzy(word: &str, query: &str) -> Vec<HighlightSegment> {
    let candidate: Vec<char> = word.chars().collect();
    let query: Vec<char> = query.trim().chars().collect();
    let mut segments = Vec::with_capacity(candidate.len());

    let (mut i, mut j) = (0usize, 0usize);
    while i < candidate.len() || j < query.len() {
        if i < candidate.len() && j < query.len() && chars_eq_folded(candidate[i], query[j]) {
            segments.push(HighlightSegment::plain(candidate[i]));
            i += 1;
            j += 1;
        } else {
            if i < candidate.len() {
                segments.push(HighlightSegment::emphasized(candidate[i]));
                i += 1;
            }
            if j < query.len() {
                j += 1;
            }
        }
    }
    segments
}

/// Merge adjacent segments with the same flag and drop empty ones.
///
/// Renderers that emit one element per run want this; the concatenated text
/// is unchanged.
pub fn coalesce(segments: Vec<HighlightSegment>) -> Vec<HighlightSegment> {
    let mut merged: Vec<HighlightSegment> = Vec::with_capacity(segments.len());
    for segment in segments.into_iter().filter(|s| !s.text.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.emphasized == segment.emphasized => last.text.push_str(&segment.text),
            _ => merged.push(segment),
        }
    }
    merged
}

/// Byte range of the first window of `word` whose chars fold-equal `query`.
fn find_folded(word: &str, query: &[char]) -> Option<(usize, usize)> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    if query.len() > chars.len() {
        return None;
    }

    (0..=chars.len() - query.len())
        .find(|&start| {
            query
                .iter()
                .zip(&chars[start..])
                .all(|(&q, &(_, c))| chars_eq_folded(c, q))
        })
        .map(|start| {
            let begin = chars.get(start).map_or(word.len(), |&(b, _)| b);
            let end = chars.get(start + query.len()).map_or(word.len(), |&(b, _)| b);
            (begin, end)
        })
}
