//! core::sanitize
//!
//! Dangling-upstream normalization.
//!
//! An upstream pointer that names a ref absent from the input set (such as a
//! remote-tracking upstream when remotes are not listed) is cleared, making
//! the branch a root. After this stage every remaining upstream pointer
//! resolves to an actual record, so hierarchy construction needs no
//! special-case handling for missing parents.

use super::index::RefIndex;
use super::record::BranchRecord;

/// Clear the record's upstream unless it names a branch present in the index.
///
/// Idempotent: a record with no upstream (or an already-cleared one) passes
/// through unchanged.
pub fn sanitize(mut record: BranchRecord, index: &RefIndex) -> BranchRecord {
    if let Some(upstream) = &record.upstream {
        if !index.contains(upstream) {
            record.upstream = None;
        }
    }
    record
}
