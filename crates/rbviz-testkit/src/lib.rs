//! Small helpers for building fixtures in tests.
//!
//! Keeping these in a microcrate avoids copy-paste across core, layout,
//! render and session tests.

pub mod proptest;

use rbviz_core::{DeleteOutcome, InsertOutcome, RbTree};

/// A single tree mutation, as generated by the strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Delete(i64),
}

/// What a replayed [`Op`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Insert(InsertOutcome),
    Delete(DeleteOutcome),
}

/// Build a tree by inserting `keys` in order.
pub fn tree_of(keys: &[i64]) -> RbTree<i64> {
    keys.iter().copied().collect()
}

/// Replay `ops` against `tree`, returning each outcome.
pub fn apply_ops(tree: &mut RbTree<i64>, ops: &[Op]) -> Vec<Applied> {
    ops.iter()
        .map(|op| match *op {
            Op::Insert(k) => Applied::Insert(tree.insert(k).outcome),
            Op::Delete(k) => Applied::Delete(tree.delete(&k).outcome),
        })
        .collect()
}

/// Named key sequences used across crates.
pub mod scenarios {
    /// Root 20 black with red leaves 10 and 30.
    pub const ASCENDING_THREE: [i64; 3] = [10, 20, 30];

    /// Black height 2 after three recolor/rotation rounds.
    pub const ASCENDING_FIVE: [i64; 5] = [10, 20, 30, 40, 50];

    /// A mixed sequence exercising both mirror branches of insertion.
    pub const ZIGZAG: [i64; 9] = [50, 20, 80, 10, 30, 70, 90, 25, 75];
}
