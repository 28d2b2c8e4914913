//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cuejump::{ScoredSegment, TranscriptSegment};

// Re-export canonical test utilities from cuejump::testing
pub use cuejump::testing::{is_ranked, make_segment, segments_from_texts};

// ============================================================================
// FIXTURES
// ============================================================================

/// Caption cues from a home-repair video, in transcript order.
pub const FAUCET_VIDEO: &[(f64, &str)] = &[
    (0.0, "hey everyone welcome back to the channel"),
    (3.2, "today we're fixing a leaky kitchen faucet"),
    (7.9, "first thing you want to do is shut off the water"),
    (12.4, "the shut-off valves are usually under the sink"),
    (17.0, "turn them clockwise until they stop"),
    (21.3, "now open the faucet to drain any pressure"),
    (25.8, "grab an adjustable wrench and a flathead screwdriver"),
    (31.1, "pop off the decorative cap on the handle"),
    (35.6, "there's a screw hiding under there"),
    (39.0, "remove the screw and lift the handle off"),
    (43.7, "you'll see the cartridge sitting in the body"),
    (48.2, "pull the retaining clip with needle-nose pliers"),
    (52.9, "now the old cartridge slides right out"),
    (57.4, "take it to the hardware store so you get an exact match"),
    (63.0, "[Music]"),
    (70.5, "okay I'm back with the new cartridge"),
    (74.1, "put a little plumber's grease on the o-rings"),
    (78.6, "slide the new cartridge in, same orientation as the old one"),
    (84.0, "clip goes back in, handle goes back on"),
    (88.7, "turn the water back on slowly"),
    (92.3, "and check under the sink for leaks"),
    (96.8, "no more drip, the faucet is fixed"),
    (101.2, "if this helped, hit subscribe"),
];

/// The faucet fixture as segments, each lasting until the next cue.
pub fn faucet_transcript() -> Vec<TranscriptSegment> {
    FAUCET_VIDEO
        .iter()
        .enumerate()
        .map(|(i, (start, text))| {
            let next = FAUCET_VIDEO.get(i + 1).map(|(s, _)| *s).unwrap_or(start + 4.0);
            TranscriptSegment::new(*start, next - start, *text)
        })
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Panic with a readable listing if results are out of ranking order.
pub fn assert_ranked(results: &[ScoredSegment]) {
    assert!(
        is_ranked(results),
        "results not ranked: {:?}",
        results
            .iter()
            .map(|r| (r.start(), r.score))
            .collect::<Vec<_>>()
    );
}

/// Start times of the results, in order.
pub fn starts(results: &[ScoredSegment]) -> Vec<f64> {
    results.iter().map(|r| r.start()).collect()
}
