//! Search correctness against a realistic transcript.
//!
//! Each test pins which cues a query should surface and how each strategy
//! (exact phrase, word overlap, character subsequence) contributes.

use super::common::{assert_ranked, faucet_transcript, starts};
use cuejump::{search, MAX_RESULTS, MIN_SCORE};

// ============================================================================
// EXACT PHRASE
// ============================================================================

#[test]
fn test_exact_phrase_ranks_first() {
    let transcript = faucet_transcript();
    let results = search("shut off the water", &transcript);

    assert_eq!(results[0].start(), 7.9);
    assert_eq!(results[0].score, 1.0);
    assert_ranked(&results);
}

#[test]
fn test_punctuation_does_not_block_exact_match() {
    let transcript = faucet_transcript();
    // "shut-off" normalizes to "shut off"
    let results = search("Shut-off valves", &transcript);

    assert_eq!(results[0].start(), 12.4);
    assert_eq!(results[0].score, 1.0);
}

#[test]
fn test_multiple_exact_hits_in_time_order() {
    let transcript = faucet_transcript();
    let results = search("under the sink", &transcript);

    assert_eq!(&starts(&results)[..2], &[12.4, 92.3]);
    assert!(results[..2].iter().all(|r| r.score == 1.0));
    assert!(results[2..].iter().all(|r| r.score < 1.0));
}

#[test]
fn test_bracketed_cue_matches_plain_word() {
    let transcript = faucet_transcript();
    let results = search("music", &transcript);

    assert_eq!(results[0].start(), 63.0);
    assert_eq!(results[0].text(), "[Music]");
}

// ============================================================================
// WORD OVERLAP
// ============================================================================

#[test]
fn test_overlap_ignores_word_order() {
    let transcript = faucet_transcript();
    let results = search("faucet kitchen leaky", &transcript);

    assert_eq!(results[0].start(), 3.2);
    assert!((results[0].score - 0.9).abs() < 1e-9);
}

#[test]
fn test_more_shared_words_rank_higher() {
    let transcript = faucet_transcript();
    let results = search("new cartridge old", &transcript);

    // All three words, out of order
    assert_eq!(results[0].start(), 78.6);
    assert!((results[0].score - 0.9).abs() < 1e-9);
    // Two of three words, tied, so transcript order
    assert_eq!(&starts(&results)[1..3], &[52.9, 70.5]);
    assert!((results[1].score - 0.6).abs() < 1e-9);
}

#[test]
fn test_exact_outranks_overlap() {
    let transcript = faucet_transcript();
    let results = search("shut off the water", &transcript);

    // 12.4 shares three of four words but not the phrase
    assert_eq!(results[1].start(), 12.4);
    assert!((results[1].score - 0.675).abs() < 1e-9);
}

// ============================================================================
// SUBSEQUENCE (TYPOS)
// ============================================================================

#[test]
fn test_typo_found_by_subsequence() {
    let transcript = faucet_transcript();
    let results = search("cartrdge", &transcript);

    assert_eq!(&starts(&results)[..4], &[43.7, 52.9, 70.5, 78.6]);
    for r in &results[..4] {
        assert!((r.score - 0.7).abs() < 1e-9, "{} scored {}", r.start(), r.score);
    }
}

#[test]
fn test_apostrophe_split_caught_by_subsequence() {
    let transcript = faucet_transcript();
    // Text tokenizes to "plumber" "s"; the query token never matches
    let results = search("plumbers grease", &transcript);

    assert_eq!(starts(&results), vec![74.1]);
    assert!((results[0].score - 0.7).abs() < 1e-9);
}

#[test]
fn test_subsequence_noise_stays_below_real_hits() {
    let transcript = faucet_transcript();
    let results = search("faucet", &transcript);

    assert_eq!(&starts(&results)[..3], &[3.2, 21.3, 96.8]);
    assert!(results[3..].iter().all(|r| r.score <= 0.7));
}

// ============================================================================
// FILTER AND CAP
// ============================================================================

#[test]
fn test_results_respect_threshold_and_cap() {
    let transcript = faucet_transcript();
    for query in ["handle", "the", "faucet", "xyzzy", "new cartridge old", "a"] {
        let results = search(query, &transcript);
        assert!(results.len() <= MAX_RESULTS, "{query}: {} results", results.len());
        assert!(
            results.iter().all(|r| r.score > MIN_SCORE),
            "{query}: result at or below threshold"
        );
        assert_ranked(&results);
    }
}

#[test]
fn test_nonsense_query_only_weak_hits() {
    let transcript = faucet_transcript();
    let results = search("xyzzy", &transcript);
    assert!(results.iter().all(|r| r.score < 0.5));
}
