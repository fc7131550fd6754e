//! # TurnData Storage
//!
//! Byte store backends and memory-mapped regions for TurnData files.
//!
//! Storage backends are **opaque byte stores** - they do not interpret
//! the data they store. The turn data section format lives in
//! `turndata_core`; this crate only moves bytes.
//!
//! ## Design Principles
//!
//! - Backends are simple byte stores (read, append, flush)
//! - No knowledge of the turn data section layout
//! - Must be `Send + Sync` so a loaded file can be shared by readers
//! - Mapped regions are read-only and borrowed, never copied
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and in-process pipelines
//! - [`FileBackend`] - For persistent storage using OS file APIs
//! - [`MappedRegion`] - Read-only memory map for zero-copy loading
//!
//! ## Example
//!
//! ```rust
//! use turndata_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! let offset = backend.append(b"turn data").unwrap();
//! let data = backend.read_at(offset, 9).unwrap();
//! assert_eq!(&data, b"turn data");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;
mod mmap;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
pub use mmap::MappedRegion;
