// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text canonicalization shared by every scoring strategy.
//!
//! Caption text is messy: mixed case, stray punctuation, music notes, line
//! breaks in the middle of a sentence. Every comparison in the scorer runs on
//! the normalized form, so both sides of a comparison go through the same
//! function.
//!
//! # Algorithm
//!
//! 1. Lowercase
//! 2. Collapse each whitespace run to a single space
//! 3. Replace every character outside `[a-z0-9 ]` with a space
//! 4. Trim spaces from both ends
//!
//! Step 3 runs after step 2, so `"a - b"` becomes `"a   b"`. The substring and
//! subsequence strategies see those runs; [`tokenize`] drops them.
//!
//! Non-ASCII letters are replaced like punctuation. "café" normalizes to
//! `"caf"`. There is no locale handling.
//!
//! Whitespace is the ECMAScript `\s` set: Unicode `White_Space` plus U+FEFF,
//! minus U+0085. Caption exports carry stray byte-order marks between words.

/// Whitespace as ECMAScript `\s` defines it.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Normalize a string for matching.
///
/// ```
/// use cuejump::normalize;
///
/// assert_eq!(normalize("  Hello,\n\tWorld! "), "hello  world");
/// assert_eq!(normalize("don't"), "don t");
/// ```
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if is_space(c) {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else {
            out.push(' ');
        }
    }

    out.trim_matches(' ').to_string()
}

/// Split normalized text into words.
///
/// Empty pieces between repeated spaces are dropped, so the result never
/// contains an empty token. Duplicates are kept in order.
///
/// ```
/// use cuejump::tokenize;
///
/// assert_eq!(tokenize("Hello -- hello WORLD"), vec!["hello", "hello", "world"]);
/// assert!(tokenize("  ...  ").is_empty());
/// ```
pub fn tokenize(value: &str) -> Vec<String> {
    split_normalized(&normalize(value))
}

/// Tokenize text that has already been through [`normalize`].
pub(crate) fn split_normalized(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(|s| s.to_string())
        .collect()
}
