//! Ranking order tests.
//!
//! Sort order is score descending, then start ascending. These tests feed
//! segments out of time order to make sure ties are broken by timestamp and
//! not by input position.

use super::common::{assert_ranked, make_segment, segments_from_texts, starts};
use cuejump::{compare_scored, search, ScoredSegment, TranscriptSegment};
use std::cmp::Ordering;

#[test]
fn test_end_to_end_scenario() {
    let segments = vec![
        make_segment(0.0, "hello world"),
        make_segment(5.0, "goodbye world"),
        make_segment(10.0, "hello there"),
    ];
    let results = search("hello", &segments);

    assert_eq!(starts(&results), vec![0.0, 10.0]);
    assert!(results.iter().all(|r| r.score == 1.0));
}

#[test]
fn test_ties_broken_by_start_not_input_order() {
    let segments = vec![
        make_segment(30.0, "we talk about rust here"),
        make_segment(10.0, "rust again"),
        make_segment(20.0, "more rust"),
    ];
    let results = search("rust", &segments);

    assert_eq!(starts(&results), vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_score_beats_earlier_start() {
    let segments = vec![
        make_segment(0.0, "a quick cat"),       // subsequence 0.7
        make_segment(50.0, "cat act"),          // exact 1.0
        make_segment(25.0, "the act was great"), // exact 1.0
    ];
    let results = search("act", &segments);

    assert_eq!(starts(&results), vec![25.0, 50.0, 0.0]);
    assert_ranked(&results);
}

#[test]
fn test_same_start_keeps_input_order() {
    let segments = vec![
        TranscriptSegment::new(4.0, 1.0, "speaker one says hello"),
        TranscriptSegment::new(4.0, 1.0, "speaker two says hello"),
    ];
    let results = search("hello", &segments);

    assert_eq!(results[0].text(), "speaker one says hello");
    assert_eq!(results[1].text(), "speaker two says hello");
}

#[test]
fn test_cap_keeps_earliest_of_tied_hits() {
    // 30 exact hits fed latest-first
    let mut texts: Vec<String> = (0..30).map(|i| format!("chapter {} recap", i)).collect();
    texts.reverse();
    let mut segments = segments_from_texts(&texts);
    segments.reverse();
    let results = search("recap", &segments);

    assert_eq!(results.len(), 25);
    let expected: Vec<f64> = (0..25).map(|i| i as f64 * 5.0).collect();
    assert_eq!(starts(&results), expected);
}

#[test]
fn test_compare_scored_is_consistent_with_sort() {
    let a = ScoredSegment {
        segment: make_segment(3.0, "a"),
        score: 0.9,
    };
    let b = ScoredSegment {
        segment: make_segment(1.0, "b"),
        score: 0.7,
    };
    let c = ScoredSegment {
        segment: make_segment(2.0, "c"),
        score: 0.9,
    };

    assert_eq!(compare_scored(&a, &b), Ordering::Less);
    assert_eq!(compare_scored(&c, &a), Ordering::Less);
    assert_eq!(compare_scored(&b, &c), Ordering::Greater);

    let mut all = vec![a, b, c];
    cuejump::rank(&mut all);
    assert_eq!(starts(&all), vec![2.0, 3.0, 1.0]);
}
