// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caption documents in, transcript segments out.
//!
//! Video players publish timed text as JSON: a list of events, each with a
//! millisecond start offset, a duration, and one or more text runs. This
//! module flattens that into [`TranscriptSegment`]s the ranker can score, and
//! picks which caption track to fetch when a player offers several.
//!
//! ```text
//! {"events":[{"tStartMs":1200,"dDurationMs":2500,"segs":[{"utf8":"hello "},{"utf8":"world"}]}]}
//!     → TranscriptSegment { start: 1.2, duration: 2.5, text: "hello world" }
//! ```
//!
//! Events without text (window setup, line breaks, music cues that are only
//! whitespace) are dropped here so the ranker never sees an empty segment.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::TranscriptSegment;

/// Errors from loading caption data.
#[derive(thiserror::Error, Debug)]
pub enum CaptionError {
    #[error("invalid transcript JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no caption tracks available")]
    NoTrack,
    #[error("caption track has no base URL")]
    MissingBaseUrl,
}

/// A timed-text caption document.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CaptionDocument {
    #[serde(default)]
    pub events: Vec<CaptionEvent>,
}

/// One caption event. Times are in milliseconds.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaptionEvent {
    #[serde(default)]
    pub t_start_ms: Option<f64>,
    #[serde(default)]
    pub d_duration_ms: Option<f64>,
    #[serde(default)]
    pub segs: Option<Vec<CaptionRun>>,
}

/// A run of text inside an event.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CaptionRun {
    #[serde(default)]
    pub utf8: Option<String>,
}

impl CaptionEvent {
    /// Concatenated text with line breaks flattened and ends trimmed.
    pub fn text(&self) -> String {
        let joined: String = self
            .segs
            .iter()
            .flatten()
            .map(|run| run.utf8.as_deref().unwrap_or(""))
            .collect();
        joined.replace('\n', " ").trim().to_string()
    }
}

/// Flatten a caption document into segments, in event order.
///
/// Missing times default to zero. Events whose text is empty after trimming
/// are skipped.
pub fn segments_from_captions(doc: &CaptionDocument) -> Vec<TranscriptSegment> {
    let segments: Vec<TranscriptSegment> = doc
        .events
        .iter()
        .filter_map(|event| {
            let text = event.text();
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                start: event.t_start_ms.unwrap_or(0.0) / 1000.0,
                duration: event.d_duration_ms.unwrap_or(0.0) / 1000.0,
                text,
            })
        })
        .collect();

    tracing::debug!(
        events = doc.events.len(),
        segments = segments.len(),
        "flattened caption document"
    );
    segments
}

// =============================================================================
// TRACK SELECTION
// =============================================================================

/// A caption track offered by a player.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub name: Option<TrackName>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub vss_id: Option<String>,
}

/// Display name of a track.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackName {
    #[serde(default)]
    pub simple_text: Option<String>,
}

impl CaptionTrack {
    /// Language code, track id and display name, space-joined and lowercased.
    fn descriptor(&self) -> String {
        [
            self.language_code.as_deref(),
            self.vss_id.as_deref(),
            self.name.as_ref().and_then(|n| n.simple_text.as_deref()),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// Whether this track looks like English.
    ///
    /// A plain substring check on the descriptor, so `"en"`, `".en-GB"` and
    /// `"English"` all count. So does anything else containing "en".
    pub fn is_english(&self) -> bool {
        self.descriptor().contains("en")
    }
}

/// Prefer the first English track, else the first track.
pub fn pick_best_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|track| track.is_english())
        .or_else(|| tracks.first())
}

/// URL that fetches `track` as a timed-text JSON document.
pub fn caption_url(track: &CaptionTrack) -> Result<String, CaptionError> {
    match track.base_url.as_deref() {
        Some(base) if !base.is_empty() => Ok(format!("{}&fmt=json3", base)),
        _ => Err(CaptionError::MissingBaseUrl),
    }
}

/// Pick a track from a JSON track list and build its fetch URL.
pub fn resolve_track(json: &str) -> Result<(CaptionTrack, String), CaptionError> {
    let tracks: Vec<CaptionTrack> = serde_json::from_str(json)?;
    let track = pick_best_track(&tracks).ok_or(CaptionError::NoTrack)?;
    let url = caption_url(track)?;
    Ok((track.clone(), url))
}

// =============================================================================
// TRANSCRIPT FILES
// =============================================================================

/// On-disk transcript: either ready-made segments or a caption document.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum TranscriptFile {
    Segments(Vec<TranscriptSegment>),
    Captions(CaptionDocument),
}

impl TranscriptFile {
    /// Segments ready for the ranker, from either shape.
    ///
    /// Ready-made segments get the same cleanup as caption events: text is
    /// flattened and trimmed, blank cues are dropped, and negative times
    /// clamp to zero.
    pub fn into_segments(self) -> Vec<TranscriptSegment> {
        match self {
            TranscriptFile::Segments(segments) => {
                let total = segments.len();
                let kept: Vec<TranscriptSegment> =
                    segments.into_iter().filter_map(clean_segment).collect();
                tracing::debug!(total, kept = kept.len(), "cleaned segment array");
                kept
            }
            TranscriptFile::Captions(doc) => segments_from_captions(&doc),
        }
    }
}

fn clean_segment(segment: TranscriptSegment) -> Option<TranscriptSegment> {
    let text = segment.text.replace('\n', " ").trim().to_string();
    if text.is_empty() {
        return None;
    }
    Some(TranscriptSegment {
        start: segment.start.max(0.0),
        duration: segment.duration.max(0.0),
        text,
    })
}

/// Parse transcript JSON in either accepted shape.
pub fn parse_transcript(json: &str) -> Result<Vec<TranscriptSegment>, CaptionError> {
    let file: TranscriptFile = serde_json::from_str(json)?;
    Ok(file.into_segments())
}

/// Read and parse a transcript file.
pub fn load_transcript(path: &Path) -> Result<Vec<TranscriptSegment>, CaptionError> {
    let content = fs::read_to_string(path).map_err(|source| CaptionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let segments = parse_transcript(&content)?;
    let seconds = segments.iter().map(TranscriptSegment::end).fold(0.0, f64::max);
    tracing::debug!(
        path = %path.display(),
        segments = segments.len(),
        seconds,
        "loaded transcript"
    );
    Ok(segments)
}
