#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can compare the
// raw store against a simple model.

use crate::direct_chaining::DirectChaining;
use crate::hash_table::HashTable;
use crate::linear_probing::LinearProbing;
use crate::policy::{slot_for, InsertError};
use crate::value::{numeric, text, HashValue, ValueRef};
use proptest::prelude::*;

// Value recipes; shrinking favors small integers and short strings.
#[derive(Clone, Debug, PartialEq)]
enum Gen {
    Int(i32),
    Byte(u8),
    Float(f32),
    Str(String),
}

impl Gen {
    fn build(&self) -> ValueRef {
        match self {
            Gen::Int(n) => numeric(*n),
            Gen::Byte(n) => numeric(*n),
            Gen::Float(x) => numeric(*x),
            Gen::Str(s) => text(s.as_str()),
        }
    }
}

fn arb_gen() -> impl Strategy<Value = Gen> {
    prop_oneof![
        any::<i32>().prop_map(Gen::Int),
        (-50i32..50).prop_map(Gen::Int),
        any::<u8>().prop_map(Gen::Byte),
        (-1.0e6f32..1.0e6).prop_map(Gen::Float),
        "[a-z]{0,4}".prop_map(Gen::Str),
    ]
}

// Property: DirectChaining against a per-slot model under payload equality.
// - Success returns the home slot; duplicates are reported only for values
//   already in the model.
// - Each bucket equals the model's list in insertion order.
// - Occupied slots never exceed S; `len` matches the model.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_chaining_state_machine(ops in proptest::collection::vec(arb_gen(), 1..80)) {
        const S: usize = 13;
        let mut sut: HashTable<S, DirectChaining> = HashTable::new();
        let mut model: Vec<Vec<Gen>> = vec![Vec::new(); S];

        for g in ops {
            let v = g.build();
            let home = slot_for(v.hash_code(), S);
            prop_assert_eq!(HashTable::<S, DirectChaining>::hash_function(&*v), home);
            let already = model[home].contains(&g);
            prop_assert_eq!(sut.contains(&v), already);
            match sut.insert(v.clone()) {
                Ok(slot) => {
                    prop_assert!(!already, "insert must fail on duplicate");
                    prop_assert_eq!(slot, home);
                    model[home].push(g);
                    let bucket = sut.bucket(home).expect("bucket created on insert");
                    let last = bucket.get(bucket.len() - 1).expect("non-empty bucket");
                    prop_assert!(std::rc::Rc::ptr_eq(last, &v));
                }
                Err(InsertError::Duplicate { slot }) => {
                    prop_assert!(already, "duplicate only when value exists");
                    prop_assert_eq!(slot, home);
                }
                Err(e) => prop_assert!(false, "unexpected error {:?}", e),
            }
        }

        for (i, expected) in model.iter().enumerate() {
            let shown: Vec<String> = sut
                .bucket(i)
                .map(|b| b.iter().map(|v| v.display()).collect())
                .unwrap_or_default();
            let want: Vec<String> = expected.iter().map(|g| g.build().display()).collect();
            prop_assert_eq!(shown, want);
        }
        prop_assert!(sut.occupied_slots() <= S);
        prop_assert_eq!(sut.len(), model.iter().map(Vec::len).sum::<usize>());
    }
}

// Property: LinearProbing keeps one value per slot, stores every distinct
// value until the table is full, and finds everything it stored.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_linear_probing_fills_then_reports_full(ops in proptest::collection::vec(arb_gen(), 1..24)) {
        const S: usize = 8;
        let mut sut: HashTable<S, LinearProbing> = HashTable::new();
        let mut stored: Vec<Gen> = Vec::new();

        for g in ops {
            let v = g.build();
            let already = stored.contains(&g);
            match sut.insert(v) {
                Ok(slot) => {
                    prop_assert!(!already);
                    prop_assert!(slot < S);
                    stored.push(g);
                }
                Err(InsertError::Duplicate { .. }) => prop_assert!(already),
                Err(InsertError::TableFull { capacity }) => {
                    prop_assert!(!already);
                    prop_assert_eq!(capacity, S);
                    prop_assert_eq!(stored.len(), S);
                }
            }
        }

        prop_assert!(sut.snapshot().iter().flatten().all(|b| b.len() == 1));
        prop_assert_eq!(sut.len(), stored.len());
        for g in &stored {
            prop_assert!(sut.contains(&g.build()));
        }
    }
}
