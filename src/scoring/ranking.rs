// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored segments get sorted.
//!
//! Sort order:
//! 1. **Score** - higher wins
//! 2. **Start time** - earlier wins, so ties read in transcript order
//!
//! Segments equal on both keep their input order because the ranker uses a
//! stable sort.

use crate::types::ScoredSegment;
use std::cmp::Ordering;

/// Compare two scored segments for ranking.
///
/// `Ordering::Less` means `a` ranks before `b`. Uses `total_cmp`, so the order
/// is total even for NaN (which the scorer never produces).
///
/// ```
/// use cuejump::{compare_scored, ScoredSegment, TranscriptSegment};
/// use std::cmp::Ordering;
///
/// let early = ScoredSegment { segment: TranscriptSegment::new(1.0, 1.0, "a"), score: 0.9 };
/// let late = ScoredSegment { segment: TranscriptSegment::new(9.0, 1.0, "b"), score: 0.9 };
/// assert_eq!(compare_scored(&early, &late), Ordering::Less);
/// ```
pub fn compare_scored(a: &ScoredSegment, b: &ScoredSegment) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.segment.start.total_cmp(&b.segment.start))
}

/// Sort in place by [`compare_scored`].
pub fn rank(results: &mut [ScoredSegment]) {
    results.sort_by(compare_scored);
}
