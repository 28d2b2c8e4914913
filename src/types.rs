// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through a query.
//!
//! | Type              | Lifetime                   | Purpose                          |
//! |-------------------|----------------------------|----------------------------------|
//! | `TranscriptSegment` | as long as the transcript | One caption cue                  |
//! | `ScoredSegment`   | one query                  | A cue plus its match score       |
//! | `ScoreBreakdown`  | one (query, text) pair     | The three sub-scores before max  |
//! | `SearchOptions`   | caller-owned               | Result cap and score threshold   |
//!
//! # Invariants
//!
//! - **TranscriptSegment**: `start >= 0 ∧ duration >= 0 ∧ !text.is_empty()`.
//!   [`load_transcript`](crate::captions::load_transcript) guarantees this
//!   for both file shapes; the ranker does not re-check it.
//!
//! - **ScoredSegment**: `0 <= score <= 1` and `score` depends only on the
//!   query and `segment.text`, never on position or neighbours.

use serde::{Deserialize, Serialize};

use crate::scoring::{EXACT_WEIGHT, MAX_RESULTS, MIN_SCORE, OVERLAP_WEIGHT, SUBSEQUENCE_WEIGHT};

/// One timed caption cue. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }

    /// When the cue stops being displayed.
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A segment paired with its score for one query.
///
/// Serializes flat: `{"start":..,"duration":..,"text":..,"score":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSegment {
    #[serde(flatten)]
    pub segment: TranscriptSegment,
    pub score: f64,
}

impl ScoredSegment {
    #[inline]
    pub fn start(&self) -> f64 {
        self.segment.start
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.segment.text
    }
}

/// Per-strategy scores for one (query, text) pair.
///
/// Each field is in `[0, 1]` before weighting. Useful for explaining why a
/// segment ranked where it did; the ranker itself only needs [`combined`].
///
/// [`combined`]: ScoreBreakdown::combined
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// 1.0 when the normalized query is a substring of the normalized text.
    pub exact: f64,
    /// Fraction of query tokens present in the text's token set.
    pub overlap: f64,
    /// Fraction of the normalized query matched as an in-order subsequence.
    pub subsequence: f64,
}

impl ScoreBreakdown {
    /// Weighted maximum of the three strategies.
    pub fn combined(&self) -> f64 {
        (self.exact * EXACT_WEIGHT)
            .max(self.overlap * OVERLAP_WEIGHT)
            .max(self.subsequence * SUBSEQUENCE_WEIGHT)
    }

    /// Name of the strategy that produced [`combined`](Self::combined).
    ///
    /// Ties go to the stronger strategy: exact, then overlap, then subsequence.
    pub fn strongest(&self) -> MatchStrategy {
        let best = self.combined();
        if self.exact * EXACT_WEIGHT >= best {
            MatchStrategy::Exact
        } else if self.overlap * OVERLAP_WEIGHT >= best {
            MatchStrategy::Overlap
        } else {
            MatchStrategy::Subsequence
        }
    }
}

/// Which scoring strategy won for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    Overlap,
    Subsequence,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Overlap => "overlap",
            MatchStrategy::Subsequence => "subsequence",
        }
    }
}

/// Knobs for [`search_with_options`](crate::search_with_options).
///
/// The defaults reproduce [`search`](crate::search): at most 25 results, each
/// scoring strictly above 0.2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Maximum number of results returned.
    pub limit: usize,
    /// Segments must score strictly above this to be kept.
    pub min_score: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: MAX_RESULTS,
            min_score: MIN_SCORE,
        }
    }
}
