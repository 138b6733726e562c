// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a suggestion result.
//!
//! A `Candidate` is one ranked completion for one query. It is produced fresh
//! per `suggest()` call and never stored. A `HighlightSegment` run explains
//! to a renderer which characters of the candidate matched.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Candidate**: `normalized_word == fold_case(word)`, and `edit_distance`
//!   is `Some` exactly when `category == FuzzyMatch`.
//!
//! - **Suggestion result**: no two candidates share a `normalized_word`.
//!
//! - **Highlight segments**: concatenating every `text` in order gives back
//!   the candidate's `word`, character for character.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which stage of the engine produced a candidate.
///
/// This is the primary sort key. Within a category numeric scores break ties,
/// but a prefix match never outranks an exact match however often it was
/// picked before.
///
/// The hierarchy: ExactQueryMatch > PrefixMatch > FuzzyMatch
///
/// Variant order is rank order, so the derived `Ord` puts the best category
/// first (smaller = better), the same convention as a bucket index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MatchCategory {
    /// The whole query equals a vocabulary term (ignoring case).
    ExactQueryMatch,
    /// A vocabulary term starts with the query.
    PrefixMatch,
    /// A vocabulary term within the edit-distance bound.
    FuzzyMatch,
}

impl MatchCategory {
    /// Numeric priority, higher is better: 3, 2, 1.
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            MatchCategory::ExactQueryMatch => 3,
            MatchCategory::PrefixMatch => 2,
            MatchCategory::FuzzyMatch => 1,
        }
    }

    /// Matches the serde `rename_all = "kebab-case"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchCategory::ExactQueryMatch => "exact-query-match",
            MatchCategory::PrefixMatch => "prefix-match",
            MatchCategory::FuzzyMatch => "fuzzy-match",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for category tags that name none of the three stages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized match category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for MatchCategory {
    type Err = UnknownCategory;

    /// Accepts the serde names plus the short tags UI layers tend to use
    /// (`exact`, `prefix`, `perfect`, `fuzzy`).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "exact-query-match" | "exact" => Ok(MatchCategory::ExactQueryMatch),
            "prefix-match" | "prefix" | "perfect" => Ok(MatchCategory::PrefixMatch),
            "fuzzy-match" | "fuzzy" => Ok(MatchCategory::FuzzyMatch),
            _ => Err(UnknownCategory(tag.to_string())),
        }
    }
}

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Display form, original casing.
    pub word: String,
    /// Case-folded identity; unique within one result.
    pub normalized_word: String,
    pub category: MatchCategory,
    /// Signed so score formulas can subtract without wrapping.
    pub score: i64,
    /// Present only for `FuzzyMatch`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_distance: Option<usize>,
}

impl Candidate {
    pub fn is_fuzzy(&self) -> bool {
        self.category == MatchCategory::FuzzyMatch
    }
}

/// A labeled run of characters inside a candidate's display word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub text: String,
    pub emphasized: bool,
}

impl HighlightSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Join segment texts back into the display word.
pub fn segments_text(segments: &[HighlightSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// A candidate together with its highlight segments, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub segments: Vec<HighlightSegment>,
}
