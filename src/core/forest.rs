//! core::forest
//!
//! Hierarchy construction: groups sanitized records into a forest keyed by
//! the upstream-tracking relation.
//!
//! # Cycle Handling
//!
//! Child discovery recurses over `ref_name → upstream` edges, so a cycle in
//! the upstream graph (possible after manual branch surgery, e.g. a branch
//! tracking itself) would recurse unboundedly. The upstream relation is
//! therefore checked for cycles up front, with a visited/path DFS over the
//! parent-pointer map. Checking before construction also catches cycles
//! detached from any root, which naive recursion would silently omit from the
//! output rather than loop on. After the check passes, construction is
//! provably bounded.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::record::BranchRecord;
use super::types::RefName;

/// Errors from hierarchy construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForestError {
    #[error("cyclic upstream graph: '{0}' is on an upstream-tracking cycle")]
    CyclicUpstream(RefName),
}

/// An ephemeral tree wrapper: one record plus its ordered children.
///
/// Built only during hierarchy construction and consumed by flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub record: BranchRecord,
    pub children: Vec<Node>,
}

/// Build the forest of upstream-tracking trees from sanitized records.
///
/// Roots are the records with no upstream (the synthetic `None` parent).
/// Sibling order matches input order at every level.
///
/// # Errors
///
/// Returns `ForestError::CyclicUpstream` if the upstream relation contains a
/// cycle, naming a branch on the cycle.
pub fn build_forest(records: &[BranchRecord]) -> Result<Vec<Node>, ForestError> {
    if let Some(on_cycle) = find_cycle(records) {
        return Err(ForestError::CyclicUpstream(on_cycle));
    }
    Ok(children_of(records, None))
}

/// Immediate children of `parent`, each with its own subtree, in input order.
fn children_of(records: &[BranchRecord], parent: Option<&RefName>) -> Vec<Node> {
    records
        .iter()
        .filter(|r| r.upstream.as_ref() == parent)
        .map(|r| Node {
            record: r.clone(),
            children: children_of(records, Some(&r.ref_name)),
        })
        .collect()
}

/// Find a branch on an upstream cycle, if any exists.
///
/// The parent relation is a multimap: duplicate ref names are undefined
/// behavior, but a duplicate carrying a different upstream must still be
/// walked, or a cycle reachable only through it would escape detection and
/// `children_of` would recurse unboundedly.
fn find_cycle(records: &[BranchRecord]) -> Option<RefName> {
    let mut parents: HashMap<&RefName, Vec<&RefName>> = HashMap::new();
    for r in records {
        if let Some(upstream) = &r.upstream {
            parents.entry(&r.ref_name).or_default().push(upstream);
        }
    }

    let mut visited = HashSet::new();
    let mut path = HashSet::new();

    for name in parents.keys() {
        if let Some(on_cycle) = cycle_from(name, &parents, &mut visited, &mut path) {
            return Some(on_cycle.clone());
        }
    }
    None
}

fn cycle_from<'a>(
    name: &'a RefName,
    parents: &HashMap<&'a RefName, Vec<&'a RefName>>,
    visited: &mut HashSet<&'a RefName>,
    path: &mut HashSet<&'a RefName>,
) -> Option<&'a RefName> {
    if path.contains(name) {
        // Re-entered the current walk: this node is on the cycle itself.
        return Some(name);
    }
    if visited.contains(name) {
        return None;
    }

    visited.insert(name);
    path.insert(name);

    let mut found = None;
    for parent in parents.get(name).into_iter().flatten() {
        found = cycle_from(parent, parents, visited, path);
        if found.is_some() {
            break;
        }
    }

    path.remove(name);
    found
}
