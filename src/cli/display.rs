// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the cuejump CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `CUEJUMP_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and turns colors off when stdout is not a TTY.

use std::sync::OnceLock;

use cuejump::format::{format_timestamp, summary_message};
use cuejump::{MatchStrategy, ScoreBreakdown, ScoredSegment, MIN_SCORE, SUBSEQUENCE_WEIGHT};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CUEJUMP_THEME") {
        if let Some(theme) = parse_theme(&theme) {
            return theme;
        }
    }

    // "fg;bg" where bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(theme) = theme_from_colorfgbg(&colorfgbg) {
            return theme;
        }
    }

    Theme::Dark
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
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

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score: exact hits bright, overlap green, fuzzy yellow.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.2}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 1.0 {
        BRIGHT_GREEN()
    } else if score > SUBSEQUENCE_WEIGHT {
        GREEN()
    } else if score > MIN_SCORE {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Color-coded strategy label
pub fn strategy_label(strategy: MatchStrategy) -> String {
    let name = strategy.as_str();
    match strategy {
        MatchStrategy::Exact => themed(BRIGHT_GREEN, &[BOLD], name),
        MatchStrategy::Overlap => themed(GREEN, &[], name),
        MatchStrategy::Subsequence => themed(YELLOW, &[], name),
    }
}

/// One result line: `  1:05  0.90  text`
pub fn result_line(result: &ScoredSegment) -> String {
    let time = themed(CYAN, &[], &format_timestamp(result.start()));
    format!(
        "{}  {}  {}",
        pad_left(&time, 7),
        score_value(result.score),
        result.text()
    )
}

/// Print ranked results followed by the count summary.
pub fn print_results(results: &[ScoredSegment]) {
    for result in results {
        println!("{}", result_line(result));
    }
    println!("{}", themed(GRAY, &[], &summary_message(results.len())));
}

/// Print the per-strategy breakdown for one pair.
pub fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!("exact        {}", score_value(breakdown.exact));
    println!("overlap      {}", score_value(breakdown.overlap));
    println!("subsequence  {}", score_value(breakdown.subsequence));
    println!(
        "score        {}  ({})",
        score_value(breakdown.combined()),
        strategy_label(breakdown.strongest())
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
