// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a match score.
//!
//! Three strategies, each producing a number in `[0, 1]`, combined by taking
//! the maximum after weighting:
//!
//! | Strategy     | Weight | Fires when                                        |
//! |--------------|--------|---------------------------------------------------|
//! | Exact        | 1.0    | normalized query is a substring of the text       |
//! | Overlap      | 0.9    | query words appear anywhere in the text           |
//! | Subsequence  | 0.7    | query characters appear in order, gaps allowed    |
//!
//! # Key Invariant: Strategy Ordering
//!
//! ```text
//! EXACT_WEIGHT > OVERLAP_WEIGHT > SUBSEQUENCE_WEIGHT > MIN_SCORE
//! ```
//!
//! A full subsequence hit can never outrank a full word-overlap hit, and a
//! full word-overlap hit can never outrank a phrase hit. Subsequence is the
//! most permissive strategy, so it also carries the lowest ceiling.
//!
//! # Known quirk: blank queries
//!
//! The empty string is a substring of everything, so a query that normalizes
//! to `""` scores 1.0 against every text. Overlap and subsequence both return
//! 0 for it. Ranking depends on this for short degenerate queries; tests pin it.

use std::collections::HashSet;

use crate::types::ScoreBreakdown;
use crate::util::normalize::{normalize, split_normalized, tokenize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weight applied to the exact-substring strategy.
pub const EXACT_WEIGHT: f64 = 1.0;

/// Weight applied to the token-overlap strategy.
pub const OVERLAP_WEIGHT: f64 = 0.9;

/// Weight applied to the ordered-subsequence strategy.
pub const SUBSEQUENCE_WEIGHT: f64 = 0.7;

/// Segments must score strictly above this to appear in results.
pub const MIN_SCORE: f64 = 0.2;

/// Maximum number of results returned by [`search`](crate::search).
pub const MAX_RESULTS: usize = 25;

/// 1.0 if `normalize(text)` contains `normalize(query)`, else 0.0.
pub fn exact_score(query: &str, text: &str) -> f64 {
    exact_normalized(&normalize(query), &normalize(text))
}

/// Fraction of query tokens found in the text's token set.
///
/// Query tokens are not deduplicated: `"go go stop"` against `"go"` scores
/// 2/3. Returns 0.0 for a query with no tokens.
pub fn overlap_score(query: &str, text: &str) -> f64 {
    overlap_tokens(&tokenize(query), &tokenize(text))
}

/// Fraction of the normalized query matched as an in-order subsequence.
///
/// A single greedy left-to-right pass over the text. Returns 0.0 if either
/// side normalizes to empty.
pub fn subsequence_score(query: &str, text: &str) -> f64 {
    subsequence_normalized(&normalize(query), &normalize(text))
}

/// All three sub-scores for a pair, normalizing each side once.
pub fn score_breakdown(query: &str, text: &str) -> ScoreBreakdown {
    let q = normalize(query);
    let t = normalize(text);
    let q_tokens = split_normalized(&q);
    let t_tokens = split_normalized(&t);

    ScoreBreakdown {
        exact: exact_normalized(&q, &t),
        overlap: overlap_tokens(&q_tokens, &t_tokens),
        subsequence: subsequence_normalized(&q, &t),
    }
}

/// Score how well `text` matches `query`, in `[0, 1]`.
///
/// ```
/// use cuejump::score_match;
///
/// assert_eq!(score_match("hello", "Hello, world!"), 1.0);
/// assert!((score_match("world hello", "hello big world") - 0.9).abs() < 1e-9);
/// assert!((score_match("act", "a quick cat") - 0.7).abs() < 1e-9);
/// ```
pub fn score_match(query: &str, text: &str) -> f64 {
    score_breakdown(query, text).combined()
}

/// Same as [`score_match`] with the query already normalized and tokenized.
///
/// The ranker scores one query against many segments, so it prepares the
/// query side once.
pub(crate) fn score_prepared(query: &PreparedQuery, text: &str) -> f64 {
    let t = normalize(text);
    let exact = exact_normalized(&query.normalized, &t);
    if exact * EXACT_WEIGHT >= 1.0 {
        return 1.0;
    }
    let t_tokens = split_normalized(&t);

    ScoreBreakdown {
        exact,
        overlap: overlap_tokens(&query.tokens, &t_tokens),
        subsequence: subsequence_normalized(&query.normalized, &t),
    }
    .combined()
}

/// A query normalized once for repeated scoring.
#[derive(Debug, Clone)]
pub(crate) struct PreparedQuery {
    pub normalized: String,
    pub tokens: Vec<String>,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        let normalized = normalize(query);
        let tokens = split_normalized(&normalized);
        Self { normalized, tokens }
    }
}

fn exact_normalized(q: &str, t: &str) -> f64 {
    if t.contains(q) {
        1.0
    } else {
        0.0
    }
}

fn overlap_tokens(q_tokens: &[String], t_tokens: &[String]) -> f64 {
    if q_tokens.is_empty() {
        return 0.0;
    }
    let set: HashSet<&str> = t_tokens.iter().map(String::as_str).collect();
    let hits = q_tokens.iter().filter(|q| set.contains(q.as_str())).count();
    hits as f64 / q_tokens.len() as f64
}

fn subsequence_normalized(q: &str, t: &str) -> f64 {
    if q.is_empty() || t.is_empty() {
        return 0.0;
    }
    // Normalized strings are ASCII, so bytes are characters
    let q = q.as_bytes();
    let mut qi = 0;
    for &ch in t.as_bytes() {
        if ch == q[qi] {
            qi += 1;
        }
        if qi >= q.len() {
            break;
        }
    }
    qi as f64 / q.len() as f64
}
