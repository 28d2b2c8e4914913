// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cuejump::captions::{load_transcript, resolve_track};
use cuejump::{
    score_breakdown, search_with_options, ScoreBreakdown, SearchOptions, TranscriptSegment,
};

mod cli;
use cli::display::{print_breakdown, print_results};
use cli::{Cli, Commands};

const BLANK_QUERY_HINT: &str = "Type a query to search.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            file,
            query,
            limit,
            min_score,
            json,
        } => {
            let segments = load_transcript(Path::new(&file))
                .with_context(|| format!("Failed to load transcript {}", file))?;
            let options = SearchOptions { limit, min_score };
            match query {
                Some(query) => run_query(&query, &segments, &options, json),
                None => run_stdin_queries(&segments, &options, json),
            }
        }
        Commands::Score { query, text, json } => {
            let breakdown = score_breakdown(&query, &text);
            if json {
                println!("{}", serde_json::to_string_pretty(&score_report(&breakdown))?);
            } else {
                print_breakdown(&breakdown);
            }
            Ok(())
        }
        Commands::Tracks { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read track list {}", file))?;
            let (track, url) = resolve_track(&content).context("No usable caption track")?;
            let label = track
                .name
                .as_ref()
                .and_then(|n| n.simple_text.as_deref())
                .or(track.language_code.as_deref())
                .unwrap_or("(unnamed)");
            println!("{}", label);
            println!("{}", url);
            Ok(())
        }
    }
}

/// The query to run for one line of input, or `None` for a blank line.
///
/// The library scores a blank query 1.0 against every segment; the CLI
/// never sends one.
fn query_text(line: &str) -> Option<&str> {
    let query = line.trim();
    (!query.is_empty()).then_some(query)
}

/// Breakdown, combined score and winning strategy as one JSON object.
fn score_report(breakdown: &ScoreBreakdown) -> serde_json::Value {
    serde_json::json!({
        "breakdown": breakdown,
        "score": breakdown.combined(),
        "strategy": breakdown.strongest(),
    })
}

fn run_query(
    query: &str,
    segments: &[TranscriptSegment],
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    let Some(query) = query_text(query) else {
        eprintln!("{}", BLANK_QUERY_HINT);
        return Ok(());
    };

    let results = search_with_options(query, segments, options);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

/// Answer one query per stdin line against a transcript loaded once.
fn run_stdin_queries(
    segments: &[TranscriptSegment],
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    tracing::info!(segments = segments.len(), "reading queries from stdin");
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read query from stdin")?;
        run_query(&line, segments, options, json)?;
    }
    Ok(())
}
