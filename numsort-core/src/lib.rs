//! Core types for the numsort sorting service.
//!
//! Defines the request and response shapes, the request validator and the
//! sort itself. Nothing here knows about HTTP.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod request;
pub mod response;

pub use error::{LocSegment, RequestError, ValidationError, Violation, ViolationKind};
pub use request::{SortRequest, NUMBERS_FIELD};
pub use response::{sort_numbers, SortResponse};
