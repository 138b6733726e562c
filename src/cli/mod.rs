// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Two subcommands: `suggest` answers one query and exits, `repl` keeps an
//! engine in memory and reads queries from stdin, learning from every
//! `:pick`. Both fall back to the built-in demo vocabulary when `--vocab` is
//! not given.

pub mod display;
pub mod state;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Ranked autocomplete suggestions with typo tolerance",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print suggestions for a single query
    Suggest {
        /// Partial query to complete
        query: String,

        /// Vocabulary file: a JSON array of strings, or one term per line
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// JSON object mapping terms to usage counts
        #[arg(long)]
        frequencies: Option<PathBuf>,

        /// JSON engine settings (cap, maxEditDistance, ...)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum number of suggestions (overrides the config cap)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Emit suggestions with highlight segments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive loop: type a query, get suggestions
    ///
    /// Lines starting with ':' are commands. `:pick N` records the Nth
    /// suggestion of the last query as selected, `:pick TERM` records a
    /// vocabulary term directly, `:recent` lists the selection history and
    /// `:quit` exits.
    Repl {
        /// Vocabulary file: a JSON array of strings, or one term per line
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// Usage log to load at start and save after every pick
        #[arg(long)]
        state: Option<PathBuf>,

        /// JSON engine settings (cap, maxEditDistance, ...)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
