//! Fuzz target: raw request bodies through `SortRequest::from_slice`.
//!
//! Arbitrary bytes must never panic the validator. Accepted bodies must sort
//! into a consistent response, and rejected ones must carry violations.

#![no_main]

use libfuzzer_sys::fuzz_target;
use numsort_core::{sort_numbers, RequestError, SortRequest};

fuzz_target!(|data: &[u8]| {
    match SortRequest::from_slice(data) {
        Ok(request) => {
            let original = request.numbers.clone();
            let response = sort_numbers(request);
            assert_eq!(response.original_numbers, original, "original order must be kept");
            assert!(response.is_consistent(), "sorted output must be a sorted permutation");
        }
        Err(RequestError::Invalid(e)) => {
            assert!(!e.violations().is_empty(), "validation error without violations");
            // Wire body serialization must not fail.
            serde_json::to_string(e.violations()).expect("violations must serialize");
        }
        Err(_) => {}
    }
});
