// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Transcript search: score, filter, rank, truncate.
//!
//! Every segment is scored against the query, anything at or below the
//! threshold is dropped, the rest are ranked by score then start time, and
//! the list is cut to the result cap. The input slice is never reordered;
//! results are fresh copies.
//!
//! **Invariants** (checked by `tests/property.rs`):
//! - `results.len() <= limit`
//! - every `score > min_score`
//! - adjacent pairs satisfy [`compare_scored`](crate::compare_scored) `!= Greater`

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::scoring::ranking::rank;
use crate::scoring::{score_prepared, PreparedQuery};
use crate::types::{ScoredSegment, SearchOptions, TranscriptSegment};

/// Find the segments that best match `query`.
///
/// At most 25 results, each scoring above 0.2, best first, earlier start
/// winning ties.
///
/// ```
/// use cuejump::{search, TranscriptSegment};
///
/// let segments = vec![
///     TranscriptSegment::new(0.0, 5.0, "hello world"),
///     TranscriptSegment::new(5.0, 5.0, "goodbye world"),
///     TranscriptSegment::new(10.0, 5.0, "hello there"),
/// ];
/// let hits = search("hello", &segments);
/// let starts: Vec<f64> = hits.iter().map(|h| h.start()).collect();
/// assert_eq!(starts, vec![0.0, 10.0]);
/// ```
pub fn search(query: &str, segments: &[TranscriptSegment]) -> Vec<ScoredSegment> {
    search_with_options(query, segments, &SearchOptions::default())
}

/// [`search`] with a caller-chosen result cap and score threshold.
pub fn search_with_options(
    query: &str,
    segments: &[TranscriptSegment],
    options: &SearchOptions,
) -> Vec<ScoredSegment> {
    if segments.is_empty() || options.limit == 0 {
        return Vec::new();
    }

    let prepared = PreparedQuery::new(query);
    let mut results = score_all(&prepared, segments, options.min_score);

    tracing::debug!(
        segments = segments.len(),
        hits = results.len(),
        "scored transcript"
    );

    rank(&mut results);
    results.truncate(options.limit);
    results
}

#[cfg(not(feature = "parallel"))]
fn score_all(
    query: &PreparedQuery,
    segments: &[TranscriptSegment],
    min_score: f64,
) -> Vec<ScoredSegment> {
    segments
        .iter()
        .filter_map(|segment| score_one(query, segment, min_score))
        .collect()
}

// `collect` on an indexed parallel iterator keeps input order, so the stable
// sort that follows sees the same sequence as the serial path.
#[cfg(feature = "parallel")]
fn score_all(
    query: &PreparedQuery,
    segments: &[TranscriptSegment],
    min_score: f64,
) -> Vec<ScoredSegment> {
    segments
        .par_iter()
        .filter_map(|segment| score_one(query, segment, min_score))
        .collect()
}

#[inline]
fn score_one(
    query: &PreparedQuery,
    segment: &TranscriptSegment,
    min_score: f64,
) -> Option<ScoredSegment> {
    let score = score_prepared(query, &segment.text);
    (score > min_score).then(|| ScoredSegment {
        segment: segment.clone(),
        score,
    })
}
