//! Proptest strategies for rbviz property-based testing
//!
//! This module provides reusable proptest strategies for generating keys and
//! operation sequences across all rbviz crates.

pub mod strategies;

pub use strategies::{
    strategy_distinct_keys, strategy_key, strategy_keys, strategy_narrow_key, strategy_op,
    strategy_ops,
};
