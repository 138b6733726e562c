// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the typeahead CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `TYPEAHEAD_THEME` first, then `COLORFGBG`, then falls back to dark.
//! Respects `NO_COLOR` and turns styling off when stdout is not a TTY, so
//! piped output is plain text.
//!
//! Highlight segments render as bold accent-colored runs; the plain runs
//! stay in the terminal's default foreground.

use std::sync::OnceLock;
use typeahead::{HighlightSegment, MatchCategory, Suggestion};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TYPEAHEAD_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Should stdout be styled?
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in a theme color plus modifiers, or leave it alone.
fn themed(colors: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if colors {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Render highlight segments. Without colors, emphasized runs are bracketed
/// so the match is still visible in a pipe.
pub fn render_segments(segments: &[HighlightSegment], colors: bool) -> String {
    let mut out = String::new();
    let mut open = false;
    for segment in segments.iter().filter(|s| !s.text.is_empty()) {
        match (segment.emphasized, colors) {
            (true, true) => out.push_str(&themed(true, YELLOW, &[BOLD], &segment.text)),
            (true, false) => {
                if !open {
                    out.push('[');
                    open = true;
                }
                out.push_str(&segment.text);
            }
            (false, _) => {
                if open {
                    out.push(']');
                    open = false;
                }
                out.push_str(&segment.text);
            }
        }
    }
    if open {
        out.push(']');
    }
    out
}

/// Short colored label for a match category.
pub fn category_label(category: MatchCategory, colors: bool) -> String {
    match category {
        MatchCategory::ExactQueryMatch => themed(colors, GREEN, &[BOLD], "exact"),
        MatchCategory::PrefixMatch => themed(colors, BLUE, &[], "prefix"),
        MatchCategory::FuzzyMatch => themed(colors, MAGENTA, &[], "fuzzy"),
    }
}

/// One result line: rank, highlighted word, category, score.
pub fn suggestion_line(rank: usize, suggestion: &Suggestion, colors: bool) -> String {
    let candidate = &suggestion.candidate;
    let word = pad_right(&render_segments(&suggestion.segments, colors), 32);
    let label = pad_right(&category_label(candidate.category, colors), 7);
    let distance = match candidate.edit_distance {
        Some(d) => themed(colors, GRAY, &[], &format!(" ~{d}")),
        None => String::new(),
    };
    format!("{rank:>3}. {word} {label} {:>6}{distance}", candidate.score)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
