//! Benchmark utilities for TurnData.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod utils;
