// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine tuning knobs.
//!
//! Every field defaults to the value the ranking policy is defined with, so
//! `SuggestConfig::default()` is the reference behavior and a JSON file only
//! needs the keys it wants to change:
//!
//! ```json
//! { "cap": 5, "maxEditDistance": 1 }
//! ```

use crate::error::{Result, TypeaheadError};
use crate::scoring::{
    DEFAULT_CAP, EXACT_MATCH_BONUS, FUZZY_DISTANCE_WEIGHT, FUZZY_MIN_QUERY_LEN,
    FUZZY_PREFIX_THRESHOLD, MAX_EDIT_DISTANCE,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestConfig {
    /// Maximum number of candidates returned.
    pub cap: usize,
    /// Fuzzy candidates must be within this many edits (and more than zero).
    pub max_edit_distance: usize,
    /// Fuzzy stage runs only for queries at least this many chars long.
    pub fuzzy_min_query_len: usize,
    /// Fuzzy stage runs only when the prefix stage found fewer words.
    pub fuzzy_prefix_threshold: usize,
    /// Added to the frequency of an exact full-query match.
    pub exact_match_bonus: i64,
    /// Score per unit of unused edit budget for fuzzy matches.
    pub fuzzy_distance_weight: i64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            max_edit_distance: MAX_EDIT_DISTANCE,
            fuzzy_min_query_len: FUZZY_MIN_QUERY_LEN,
            fuzzy_prefix_threshold: FUZZY_PREFIX_THRESHOLD,
            exact_match_bonus: EXACT_MATCH_BONUS,
            fuzzy_distance_weight: FUZZY_DISTANCE_WEIGHT,
        }
    }
}

impl SuggestConfig {
    /// Parse a JSON config document. Call `validate` before use.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| TypeaheadError::io(path, e))?;
        let config = Self::from_json(&raw).map_err(|e| TypeaheadError::json(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make a stage meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.max_edit_distance == 0 {
            return Err(TypeaheadError::InvalidConfig(
                "maxEditDistance must be at least 1 (distance 0 is an exact match)".to_string(),
            ));
        }
        if self.exact_match_bonus < 0 || self.fuzzy_distance_weight < 0 {
            return Err(TypeaheadError::InvalidConfig(
                "score bonuses must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
