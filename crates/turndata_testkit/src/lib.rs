//! # TurnData Testkit
//!
//! Test utilities for TurnData.
//!
//! This crate provides:
//! - Sample records and temporary turn data files
//! - Property-based test generators using proptest
//! - Golden test utilities for format verification
//! - Byte-level section vectors shared by every reader implementation
//!
//! ## Usage
//!
//! ```rust
//! use turndata_testkit::prelude::*;
//!
//! let file = TestTurnFile::create(&sample_store(), SAMPLE_CHECKSUM);
//! let region = file.map();
//! assert_eq!(hex_encode(region.as_bytes()), SAMPLE_SECTION_HEX);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod golden;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::golden::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use golden::*;
pub use vectors::*;
