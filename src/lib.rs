// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Find the moments in a timed transcript that match a free-text query.
//!
//! Give it a query and the caption cues of a long video; get back up to 25
//! cues, best first, each with its timestamp and a score in `[0, 1]`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ util/        │────▶│ scoring/     │────▶│ search/      │
//! │ normalize,   │     │ score_match, │     │ search,      │
//! │ tokenize     │     │ compare_     │     │ search_with_ │
//! │              │     │ scored       │     │ options      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  ▲
//! ┌──────────────┐                                 │
//! │ captions/    │── TranscriptSegment ────────────┘
//! │ (JSON in)    │
//! └──────────────┘
//! ```
//!
//! `util`, `scoring` and `search` are pure functions over in-memory data and
//! never fail. `captions` and `format` are the edges: loading timed text and
//! printing results.
//!
//! # Usage
//!
//! ```
//! use cuejump::{search, TranscriptSegment};
//!
//! let transcript = vec![
//!     TranscriptSegment::new(0.0, 4.0, "Welcome back to the channel"),
//!     TranscriptSegment::new(4.0, 3.5, "today we're fixing a leaky faucet"),
//!     TranscriptSegment::new(7.5, 4.0, "first, shut off the water"),
//! ];
//!
//! let hits = search("leaky faucet", &transcript);
//! assert_eq!(hits[0].start(), 4.0);
//! assert_eq!(hits[0].score, 1.0);
//! ```

pub mod captions;
pub mod format;
mod scoring;
mod search;
pub mod testing;
mod types;
mod util;

// Re-exports for public API
pub use scoring::ranking::{compare_scored, rank};
pub use scoring::{
    exact_score, overlap_score, score_breakdown, score_match, subsequence_score, EXACT_WEIGHT,
    MAX_RESULTS, MIN_SCORE, OVERLAP_WEIGHT, SUBSEQUENCE_WEIGHT,
};
pub use search::{search, search_with_options};
pub use types::{MatchStrategy, ScoreBreakdown, ScoredSegment, SearchOptions, TranscriptSegment};
pub use util::normalize::{normalize, tokenize};
