use serde::{Deserialize, Serialize};

use crate::request::SortRequest;

/// The input list alongside its sorted copy.
///
/// `sorted_numbers` is always a non-decreasing permutation of
/// `original_numbers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SortResponse {
    /// The input exactly as received.
    pub original_numbers: Vec<i64>,
    /// The same integers in non-decreasing order.
    pub sorted_numbers: Vec<i64>,
}

impl SortResponse {
    /// Return `true` if `sorted_numbers` is a non-decreasing permutation of
    /// `original_numbers`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.original_numbers.len() != self.sorted_numbers.len() {
            return false;
        }
        if !self.sorted_numbers.windows(2).all(|w| w[0] <= w[1]) {
            return false;
        }
        let mut expected = self.original_numbers.clone();
        expected.sort_unstable();
        expected == self.sorted_numbers
    }
}

/// Sort a validated request, keeping the original order alongside.
///
/// Uses a stable sort. Never fails: every input has already been validated.
#[must_use]
pub fn sort_numbers(request: SortRequest) -> SortResponse {
    let original_numbers = request.numbers;
    let mut sorted_numbers = original_numbers.clone();
    sorted_numbers.sort();
    SortResponse { original_numbers, sorted_numbers }
}
