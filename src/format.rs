// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-readable output for search results.

/// Format seconds as `m:ss`.
///
/// Fractions are floored; minutes are not wrapped into hours. Negative and
/// non-finite input prints as `0:00`.
///
/// ```
/// use cuejump::format::format_timestamp;
///
/// assert_eq!(format_timestamp(0.0), "0:00");
/// assert_eq!(format_timestamp(65.9), "1:05");
/// assert_eq!(format_timestamp(3725.0), "62:05");
/// ```
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// One-line summary of a result count.
pub fn summary_message(count: usize) -> String {
    if count == 0 {
        "No matches found.".to_string()
    } else {
        format!("Found {} matches.", count)
    }
}
