//! Fuzz harness for insert/delete sequences
//!
//! Each pair of input bytes is one operation: the high bit of the first byte
//! picks insert or delete, the second byte is the key. Keys are drawn from a
//! small range so deletes usually hit. The tree must validate after every
//! operation and agree with a `BTreeSet` model.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rbviz_core::{DeleteOutcome, InsertOutcome, RbTree};
use rbviz_validate::TreeValidator;
use std::collections::BTreeSet;

fuzz_target!(|data: &[u8]| {
    let mut tree = RbTree::new();
    let mut model = BTreeSet::new();

    for pair in data.chunks_exact(2) {
        let key = i64::from(pair[1] % 64);
        if pair[0] & 0x80 == 0 {
            let outcome = tree.insert(key).outcome;
            assert_eq!(outcome == InsertOutcome::Inserted, model.insert(key));
        } else {
            let outcome = tree.delete(&key).outcome;
            assert_eq!(outcome == DeleteOutcome::Deleted, model.remove(&key));
        }

        if let Err(violation) = TreeValidator::validate(&tree) {
            panic!("{violation}");
        }
    }

    assert!(tree.keys().copied().eq(model.iter().copied()));
});
