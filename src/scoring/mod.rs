// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers.
//!
//! Category dominates everything else. An exact match with zero usage beats a
//! prefix match picked a thousand times; numeric scores only order candidates
//! inside a category.

mod core;
pub mod ranking;

pub use self::core::*;
