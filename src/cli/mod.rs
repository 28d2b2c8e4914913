// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cuejump command-line interface.
//!
//! Three subcommands: `search` to query a transcript file, `score` to see how
//! one query/text pair breaks down, and `tracks` to pick a caption track from
//! a player's track list. `search` without a query reads queries from stdin,
//! one per line, against a transcript loaded once.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cuejump",
    about = "Find the moments in a timed transcript that match a query",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a transcript file and display ranked moments
    Search {
        /// Path to a transcript JSON file (segment array or caption document)
        file: String,

        /// Search query. Omit to read queries from stdin, one per line
        query: Option<String>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "25")]
        limit: usize,

        /// Drop results scoring at or below this value
        #[arg(long, default_value = "0.2")]
        min_score: f64,

        /// Print results as a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the per-strategy score for one query against one text
    Score {
        /// Search query
        query: String,

        /// Candidate text
        text: String,

        /// Print the breakdown as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Pick a caption track from a JSON track list and print its URL
    Tracks {
        /// Path to a JSON array of caption tracks
        file: String,
    },
}
