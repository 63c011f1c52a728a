//! Fuzz target: sorting arbitrary integer lists.
//!
//! Interprets the input as little-endian `i64`s and checks the sort invariants
//! plus idempotence.

#![no_main]

use libfuzzer_sys::fuzz_target;
use numsort_core::{sort_numbers, SortRequest};

fuzz_target!(|data: &[u8]| {
    let numbers: Vec<i64> = data
        .chunks_exact(8)
        .map(|c| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(c);
            i64::from_le_bytes(bytes)
        })
        .collect();

    let once = sort_numbers(SortRequest::new(numbers));
    assert!(once.is_consistent());

    let twice = sort_numbers(SortRequest::new(once.sorted_numbers.clone()));
    assert_eq!(twice.sorted_numbers, once.sorted_numbers, "sort must be idempotent");
});
