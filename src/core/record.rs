//! core::record
//!
//! Branch records and the NUL-delimited line parser.
//!
//! # Input Format
//!
//! Each input line carries one branch with seven fields separated by NUL,
//! matching the `%00` atoms of the producing format string:
//!
//! ```text
//! %(HEAD)%00%(objectname:short=7)%00%(refname)%00%(refname:short)%00%(upstream)%00%(upstream:short)%00%(upstream:track)
//! ```
//!
//! The parser enforces arity only. Field contents are opaque text: no
//! trimming, no case normalization, no refname validation. The one
//! representational choice is that an empty upstream field parses to `None`,
//! so a branch literally named by the empty string can never collide with the
//! synthetic "no parent" root.

use serde::Serialize;
use thiserror::Error;

use super::types::RefName;

/// Field separator in the input format (`%00` in the git format string).
pub const FIELD_SEPARATOR: char = '\0';

/// Number of fields per record.
pub const FIELD_COUNT: usize = 7;

/// Errors from record parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected 7 NUL-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
}

/// One row of branch metadata, in input field order.
///
/// Immutable after sanitization except for `short_name`, which the flattening
/// step rewrites (on an owned copy) to prepend indentation. Serializes for the
/// `--json` output mode; serialization is write-only and never feeds back into
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRecord {
    /// `%(HEAD)` marker: `*` for the currently checked-out branch.
    pub head: String,
    /// `%(objectname:short=7)` abbreviated commit hash.
    pub short_hash: String,
    /// `%(refname)` - the record's identity key.
    pub ref_name: RefName,
    /// `%(refname:short)` human-facing name; indented by the renderer.
    pub short_name: String,
    /// `%(upstream)` tracked upstream ref; `None` means no upstream.
    pub upstream: Option<RefName>,
    /// `%(upstream:short)` short name of the upstream branch.
    pub upstream_short: String,
    /// `%(upstream:track)` free-text ahead/behind annotation.
    pub track: String,
}

impl BranchRecord {
    /// Parse one input line (line terminator already stripped).
    ///
    /// `line_number` is 1-based and used only for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::FieldCount` unless the line splits into exactly
    /// seven fields.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount {
                line: line_number,
                found: fields.len(),
            });
        }

        Ok(Self {
            head: fields[0].to_string(),
            short_hash: fields[1].to_string(),
            ref_name: RefName::new(fields[2]),
            short_name: fields[3].to_string(),
            upstream: if fields[4].is_empty() {
                None
            } else {
                Some(RefName::new(fields[4]))
            },
            upstream_short: fields[5].to_string(),
            track: fields[6].to_string(),
        })
    }

    /// Whether this record is the currently checked-out branch.
    ///
    /// Git emits `*` for the current branch and a space otherwise; any other
    /// value simply means "not current".
    pub fn is_current(&self) -> bool {
        self.head == "*"
    }
}
