//! git-br - git branch with tabular alignment
//!
//! git-br is a single-binary filter that turns the machine-formatted output of
//! `git branch --format=...` into an ordered, indented report of which branches
//! track which other branches as upstream. It reads NUL-delimited branch
//! records on stdin and writes an aligned table (or names-only / JSON lines)
//! to stdout.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the pipeline)
//! - [`config`] - Optional TOML presentation defaults
//! - [`pipeline`] - Orchestrates Parse → Index → Sanitize → Build → Flatten
//! - [`core`] - Domain types and the pure record-to-hierarchy transform
//! - [`ui`] - Output formatting: table, names-only, and JSON modes
//!
//! # Correctness Invariants
//!
//! git-br maintains the following invariants:
//!
//! 1. Every sanitized upstream pointer resolves to a record in the input
//! 2. Rendered output preserves all record fields except the indented name
//! 3. Cyclic upstream graphs are rejected before tree construction
//! 4. Sibling order in the output matches input order

pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod ui;
