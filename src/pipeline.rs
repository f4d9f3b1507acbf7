//! pipeline
//!
//! Stage orchestration: Parse → Index → Sanitize → Build → Flatten.
//!
//! The pipeline is a pure function from input text to the flattened,
//! depth-first record sequence. Data flows strictly forward; there is no
//! feedback between stages. Presentation (table layout, color, JSON) is
//! layered on top by the caller and never reaches back into the pipeline.

use thiserror::Error;

use crate::core::flatten::flatten;
use crate::core::forest::{build_forest, ForestError};
use crate::core::index::RefIndex;
use crate::core::record::{BranchRecord, ParseError};
use crate::core::sanitize::sanitize;
use crate::ui::output::{self, Verbosity};

/// Errors from the record-to-hierarchy transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Forest(#[from] ForestError),
}

/// Run the full transform over the input text.
///
/// Each line holds one NUL-delimited branch record; `str::lines` strips the
/// terminator (including `\r\n`) before parsing, so line endings never count
/// toward field arity. Empty input yields an empty sequence.
///
/// In debug verbosity, each dangling upstream cleared by sanitization is
/// reported on stderr.
///
/// # Errors
///
/// Fails fast on the first malformed line, and on any upstream-tracking
/// cycle; no partial output is produced.
pub fn run(input: &str, verbosity: Verbosity) -> Result<Vec<BranchRecord>, PipelineError> {
    let records = input
        .lines()
        .enumerate()
        .map(|(i, line)| BranchRecord::parse(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let index = RefIndex::build(&records);

    let records: Vec<BranchRecord> = records
        .into_iter()
        .map(|record| {
            if let Some(upstream) = &record.upstream {
                if !index.contains(upstream) {
                    output::debug(
                        format!(
                            "clearing dangling upstream '{}' of '{}'",
                            upstream, record.ref_name
                        ),
                        verbosity,
                    );
                }
            }
            sanitize(record, &index)
        })
        .collect();

    let forest = build_forest(&records)?;
    Ok(flatten(forest))
}
