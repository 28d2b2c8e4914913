//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{ScoredSegment, TranscriptSegment};

/// Create a segment with a fixed one-second duration.
pub fn make_segment(start: f64, text: &str) -> TranscriptSegment {
    TranscriptSegment::new(start, 1.0, text)
}

/// One segment per text, five seconds apart starting at zero.
pub fn segments_from_texts<S: AsRef<str>>(texts: &[S]) -> Vec<TranscriptSegment> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| TranscriptSegment::new(i as f64 * 5.0, 5.0, text.as_ref()))
        .collect()
}

/// True when every adjacent pair is in ranking order.
pub fn is_ranked(results: &[ScoredSegment]) -> bool {
    results.windows(2).all(|w| {
        w[0].score > w[1].score || (w[0].score == w[1].score && w[0].start() <= w[1].start())
    })
}
