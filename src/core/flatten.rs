//! core::flatten
//!
//! Depth-first pre-order flattening of the forest into the output sequence.
//!
//! Each node is emitted before its subtree; each subtree is fully emitted
//! before the next sibling. The only field touched is `short_name`, which
//! gains an indentation prefix of two spaces per level of depth. The rewrite
//! happens on the owned record as it is emitted, so tree construction stays
//! side-effect-free and this module is the sole owner of display indentation.

use super::forest::Node;
use super::record::BranchRecord;

/// Indentation added per level of depth.
pub const INDENT: &str = "  ";

/// Flatten the forest into depth-first pre-order, indenting short names.
pub fn flatten(forest: Vec<Node>) -> Vec<BranchRecord> {
    let mut out = Vec::new();
    for node in forest {
        flatten_into(node, "", &mut out);
    }
    out
}

fn flatten_into(node: Node, prefix: &str, out: &mut Vec<BranchRecord>) {
    let Node { record, children } = node;
    out.push(BranchRecord {
        short_name: format!("{}{}", prefix, record.short_name),
        ..record
    });

    let child_prefix = format!("{}{}", prefix, INDENT);
    for child in children {
        flatten_into(child, &child_prefix, out);
    }
}
