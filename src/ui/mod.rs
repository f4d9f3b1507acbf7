//! ui
//!
//! Output formatting and user-facing messaging.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware stderr messaging
//! - [`table`] - Table, names-only, and JSON presentation modes
//!
//! # Design
//!
//! Presentation consumes the pipeline's flattened record sequence and never
//! reorders or re-parses it. All diagnostics go to stderr so stdout carries
//! only the rendered report.

pub mod output;
pub mod table;
