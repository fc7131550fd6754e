//! # TurnData Codec
//!
//! Fixed-width byte stream primitives for TurnData.
//!
//! This crate knows nothing about turn records. It provides the typed
//! scalar and array reads/writes that the turn data serialization is built on:
//! - Every value has a fixed width given by [`FixedWidth::WIDTH`]
//! - All integers are little-endian
//! - Arrays are densely packed with no per-element framing
//! - Reads are bounds-checked before anything is allocated
//!
//! ## Usage
//!
//! ```
//! use turndata_codec::{StreamReader, StreamWriter};
//!
//! let mut writer = StreamWriter::new();
//! writer.write_u32(0xdead_beef);
//! writer.write_values([1u16, 2, 3]);
//! let bytes = writer.into_bytes();
//!
//! let mut reader = StreamReader::new(&bytes);
//! assert_eq!(reader.read_u32().unwrap(), 0xdead_beef);
//! assert_eq!(reader.read_array::<u16>(3).unwrap(), vec![1, 2, 3]);
//! reader.finish().unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod fixed;
mod reader;
mod writer;

pub use error::{CodecError, CodecResult};
pub use fixed::FixedWidth;
pub use reader::StreamReader;
pub use writer::StreamWriter;
