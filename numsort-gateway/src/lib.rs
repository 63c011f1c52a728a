//! HTTP API gateway for the numsort sorting service.
//!
//! Exposes `POST /sorted-numbers`, which returns a list of integers in both
//! original and sorted order, and a `GET /` status probe.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;
