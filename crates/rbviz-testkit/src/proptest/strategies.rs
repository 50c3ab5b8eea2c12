//! Proptest strategies for rbviz property-based testing

use crate::Op;
use proptest::prelude::*;

// ============================================================================
// Key Strategies
// ============================================================================

/// Any key a session would accept.
pub fn strategy_key() -> impl Strategy<Value = i64> {
    -10_000i64..10_000i64
}

/// Keys from a small range, so inserts and deletes collide often.
pub fn strategy_narrow_key() -> impl Strategy<Value = i64> {
    0i64..64i64
}

/// Up to `max` keys, duplicates allowed.
pub fn strategy_keys(max: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(strategy_key(), 0..max)
}

/// Up to `max` distinct keys in random order.
pub fn strategy_distinct_keys(max: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(strategy_key(), 0..max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

// ============================================================================
// Operation Strategies
// ============================================================================

pub fn strategy_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => strategy_narrow_key().prop_map(Op::Insert),
        2 => strategy_narrow_key().prop_map(Op::Delete),
    ]
}

/// Up to `max` mixed inserts and deletes.
pub fn strategy_ops(max: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(strategy_op(), 0..max)
}
