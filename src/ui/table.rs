//! ui::table
//!
//! The three presentation modes layered on the flattened record sequence:
//!
//! - **Table** (default): columns marker, hash, name, track info, upstream
//!   short name, each padded to the column's widest value. The marker and
//!   track columns are right-adjusted, the rest left-adjusted. The final
//!   column is never padded, so lines carry no trailing whitespace.
//! - **Short** (`--short`): one indented short name per line.
//! - **Json** (`--json`): one JSON object per record per line, all seven
//!   fields, in pipeline order.
//!
//! Color wraps already-padded cells, so visible alignment is identical with
//! color on or off, and stripping SGR sequences from colored output yields
//! the plain output byte for byte.

use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::core::record::BranchRecord;

// Palette for table mode.
const RESET: &str = "\x1b[0m";
const RESET_COLOR: &str = "\x1b[39;49m";
const BOLD: &str = "\x1b[1m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";

/// Marker cell for the currently checked-out branch.
const CURRENT_MARKER: &str = "●";

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Aligned table: marker, hash, name, track, upstream
    #[default]
    Table,
    /// Indented short names only
    Short,
    /// One JSON object per record per line
    Json,
}

/// When to emit ANSI colors in table mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Resolve the choice against the actual stdout.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Render the flattened record sequence in the requested format.
///
/// # Errors
///
/// Only JSON mode can fail, if a record cannot be serialized.
pub fn render(records: &[BranchRecord], format: Format, color: bool) -> Result<String, serde_json::Error> {
    match format {
        Format::Table => Ok(table(records, color)),
        Format::Short => Ok(short(records)),
        Format::Json => json(records),
    }
}

/// Names-only mode: one indented short name per line.
fn short(records: &[BranchRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n", r.short_name))
        .collect()
}

/// JSON-lines mode: all fields, no padding, no color.
fn json(records: &[BranchRecord]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// One table cell: padded text plus the SGR pair wrapped around it when
/// color is enabled.
struct Cell {
    text: String,
    sgr: Option<(&'static str, &'static str)>,
}

/// Table mode: transpose to columns, measure, pad, transpose back.
fn table(records: &[BranchRecord], color: bool) -> String {
    // Non-current rows keep a blank marker cell, as git's %(HEAD) does, so
    // the hash column lines up whether or not any listed branch is current.
    let markers: Vec<&str> = records
        .iter()
        .map(|r| if r.is_current() { CURRENT_MARKER } else { " " })
        .collect();

    let marker_w = column_width(markers.iter().copied());
    let hash_w = column_width(records.iter().map(|r| r.short_hash.as_str()));
    let name_w = column_width(records.iter().map(|r| r.short_name.as_str()));
    let track_w = column_width(records.iter().map(|r| r.track.as_str()));

    let mut out = String::new();
    for (record, marker) in records.iter().zip(markers) {
        let cells = vec![
            Cell {
                text: rjust(marker, marker_w),
                sgr: record.is_current().then_some((BOLD, RESET)),
            },
            Cell {
                text: ljust(&record.short_hash, hash_w),
                sgr: Some((YELLOW, RESET_COLOR)),
            },
            Cell {
                text: ljust(&record.short_name, name_w),
                sgr: None,
            },
            Cell {
                text: rjust(&record.track, track_w),
                sgr: Some((CYAN, RESET_COLOR)),
            },
            Cell {
                // Last column: left-aligned, never padded.
                text: record.upstream_short.clone(),
                sgr: Some((BLUE, RESET)),
            },
        ];
        out.push_str(&row(cells, color));
        out.push('\n');
    }
    out
}

/// Join a row's cells with single spaces, dropping trailing blank cells and
/// trailing padding so colored and plain output agree modulo SGR sequences.
fn row(mut cells: Vec<Cell>, color: bool) -> String {
    while cells.last().is_some_and(|c| c.text.trim().is_empty()) {
        cells.pop();
    }
    if let Some(last) = cells.last_mut() {
        last.text.truncate(last.text.trim_end().len());
    }

    cells
        .iter()
        .map(|cell| match (cell.sgr, color) {
            (Some((on, off)), true) => format!("{}{}{}", on, cell.text, off),
            _ => cell.text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display width of a cell: characters, not bytes (the marker is multi-byte).
fn width(text: &str) -> usize {
    text.chars().count()
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(width).max().unwrap_or(0)
}

fn ljust(text: &str, to: usize) -> String {
    format!("{}{}", text, " ".repeat(to.saturating_sub(width(text))))
}

fn rjust(text: &str, to: usize) -> String {
    format!("{}{}", " ".repeat(to.saturating_sub(width(text))), text)
}
