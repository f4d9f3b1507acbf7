//! core::index
//!
//! Reference index: the set of all ref names present in the input, used by the
//! sanitizer for membership tests on upstream pointers. Construction is O(n);
//! lookups are O(1) amortized. The index carries no ordering.

use std::collections::HashSet;

use super::record::BranchRecord;
use super::types::RefName;

/// Set of every `ref_name` in the parsed input.
#[derive(Debug, Clone, Default)]
pub struct RefIndex {
    names: HashSet<RefName>,
}

impl RefIndex {
    /// Build the index from the full parsed record sequence.
    pub fn build(records: &[BranchRecord]) -> Self {
        Self {
            names: records.iter().map(|r| r.ref_name.clone()).collect(),
        }
    }

    /// Whether a ref name is present in the input set.
    pub fn contains(&self, name: &RefName) -> bool {
        self.names.contains(name)
    }
}
