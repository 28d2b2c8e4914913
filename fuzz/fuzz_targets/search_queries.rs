// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for transcript search.
//!
//! Arbitrary queries against arbitrary cue text. Search must never panic,
//! never exceed the result cap, never return a score outside `(0.2, 1]`,
//! and always return results in ranking order.

#![no_main]

use arbitrary::Arbitrary;
use cuejump::{search, TranscriptSegment, MAX_RESULTS, MIN_SCORE};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    cues: Vec<(u16, String)>,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    if input.query.len() > 200 || input.cues.len() > 500 {
        return;
    }

    let segments: Vec<TranscriptSegment> = input
        .cues
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(start, text)| TranscriptSegment::new(f64::from(start), 1.0, text))
        .collect();

    let results = search(&input.query, &segments);

    // INVARIANT 1: bounded by the cap
    assert!(results.len() <= MAX_RESULTS);

    for r in &results {
        // INVARIANT 2: above threshold, at most 1
        assert!(r.score > MIN_SCORE && r.score <= 1.0, "bad score {}", r.score);
    }

    // INVARIANT 3: score desc, then start asc
    for w in results.windows(2) {
        assert!(
            w[0].score > w[1].score || (w[0].score == w[1].score && w[0].start() <= w[1].start()),
            "out of order: {:?} before {:?}",
            (w[0].start(), w[0].score),
            (w[1].start(), w[1].score)
        );
    }
});
