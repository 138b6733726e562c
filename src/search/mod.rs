// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion search: where the index, the distance and the ranking meet.
//!
//! The three-stage strategy (exact → prefix → fuzzy) gives a user what they
//! typed first, then what they were typing toward, then what they probably
//! meant.

pub mod dedup;
pub mod tiered;

pub use tiered::{suggest_from, SuggestionEngine};
