// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string helpers shared by every layer.
//!
//! Right now that means case folding. It lives here rather than in `index`
//! because the distance and the highlighter need the exact same notion of
//! "equal ignoring case" as the trie does.

pub mod normalize;
