//! # TurnData Core
//!
//! Columnar store of per-edge turn metadata for a routing graph.
//!
//! This crate provides:
//! - Domain types: [`TurnInstruction`], [`LaneDataId`], [`EntryClassId`],
//!   [`TurnBearing`]
//! - [`TurnStore`] in three ownership modes: [`TurnDataContainer`] (owned),
//!   [`TurnDataView`] (borrowed section) and [`TurnDataExternal`]
//!   (borrowed buffers)
//! - The section codec in [`serialization`] and file helpers in [`files`]
//!
//! ## Example
//!
//! ```rust
//! use turndata_core::{
//!     files, DirectionModifier, EdgeId, EntryClassId, LoadConfig, TurnBearing,
//!     TurnDataContainer, TurnInstruction, TurnRecord, TurnType,
//! };
//! use turndata_storage::InMemoryBackend;
//!
//! let mut store = TurnDataContainer::new();
//! store.push(TurnRecord::without_lanes(
//!     TurnInstruction::new(TurnType::Turn, DirectionModifier::Right),
//!     EntryClassId::new(0),
//!     TurnBearing::from_degrees(90.0),
//!     TurnBearing::from_degrees(180.0),
//! ));
//!
//! let mut backend = InMemoryBackend::new();
//! files::write_turn_data(&mut backend, &store, 0xc0ffee).unwrap();
//!
//! let config = LoadConfig::new().expected_checksum(0xc0ffee);
//! let (loaded, _) = files::read_turn_data(&backend, &config).unwrap();
//! assert!(!loaded.has_lane_data(EdgeId::new(0)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod column;
mod config;
mod error;
pub mod files;
mod instruction;
mod layout;
mod record;
pub mod serialization;
mod store;
mod types;

pub use column::{Column, ColumnView, External, Owned, Ownership, View};
pub use config::LoadConfig;
pub use error::{TurnDataError, TurnDataResult};
pub use instruction::{DirectionModifier, TurnInstruction, TurnType};
pub use layout::{Block, TurnDataLayout, HEADER_SIZE};
pub use record::TurnRecord;
pub use serialization::{verify_checksum, SectionHeader};
pub use store::{TurnDataContainer, TurnDataExternal, TurnDataView, TurnStore};
pub use types::{
    EdgeId, EntryClassId, LaneDataId, TurnBearing, INVALID_ENTRY_CLASSID, INVALID_LANE_DATAID,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
