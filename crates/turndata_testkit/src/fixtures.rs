//! Test fixtures and turn data file helpers.
//!
//! Provides a small, fully specified sample store and temporary files
//! holding serialized turn data.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use turndata_core::{
    files, DirectionModifier, EntryClassId, LaneDataId, Ownership, TurnBearing, TurnDataContainer,
    TurnInstruction, TurnRecord, TurnStore, TurnType, INVALID_LANE_DATAID,
};
use turndata_storage::{FileBackend, MappedRegion};

/// Connectivity checksum used with [`sample_store`].
pub const SAMPLE_CHECKSUM: u32 = 0xdead_beef;

/// Three records covering lane data present, absent, and present again.
///
/// Edge 1 has no lane data. Edge 2 enters a roundabout.
#[must_use]
pub fn sample_records() -> Vec<TurnRecord> {
    vec![
        TurnRecord::new(
            TurnInstruction::new(TurnType::Fork, DirectionModifier::SlightRight),
            LaneDataId::new(5),
            EntryClassId::new(0),
            TurnBearing::from_raw(0x10),
            TurnBearing::from_raw(0x20),
        ),
        TurnRecord::new(
            TurnInstruction::new(TurnType::Continue, DirectionModifier::Straight),
            INVALID_LANE_DATAID,
            EntryClassId::new(1),
            TurnBearing::from_raw(0x30),
            TurnBearing::from_raw(0x40),
        ),
        TurnRecord::new(
            TurnInstruction::new(TurnType::EnterRoundabout, DirectionModifier::Right),
            LaneDataId::new(7),
            EntryClassId::new(2),
            TurnBearing::from_raw(0xff),
            TurnBearing::from_raw(0x00),
        ),
    ]
}

/// [`sample_records`] collected into an owning store.
#[must_use]
pub fn sample_store() -> TurnDataContainer {
    sample_records().into_iter().collect()
}

/// A store of `count` records cycling through every turn type, with every
/// third edge lacking lane data.
#[must_use]
pub fn generated_store(count: usize) -> TurnDataContainer {
    (0..count)
        .map(|i| {
            let turn_type = TurnType::from_code((i % 27) as u8).unwrap_or(TurnType::Invalid);
            let modifier = DirectionModifier::from_code((i % 8) as u8);
            let lane = if i % 3 == 2 {
                INVALID_LANE_DATAID
            } else {
                LaneDataId::new((i % 1000) as u16)
            };
            TurnRecord::new(
                TurnInstruction::new(turn_type, modifier),
                lane,
                EntryClassId::new((i % 64) as u16),
                TurnBearing::from_raw(i as u8),
                TurnBearing::from_raw((i / 7) as u8),
            )
        })
        .collect()
}

/// A serialized turn data file with automatic cleanup.
pub struct TestTurnFile {
    path: PathBuf,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: TempDir,
}

impl TestTurnFile {
    /// Writes `store` with `checksum` to a new temporary file.
    pub fn create<O: Ownership>(store: &TurnStore<O>, checksum: u32) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("graph.turns");

        let mut backend = FileBackend::open(&path).expect("Failed to create turn data file");
        files::write_turn_data(&mut backend, store, checksum)
            .expect("Failed to write turn data");

        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Writes raw bytes to a new temporary file, for malformed inputs.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("graph.turns");
        std::fs::write(&path, bytes).expect("Failed to write turn data file");

        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file for reading.
    pub fn backend(&self) -> FileBackend {
        FileBackend::open_read_only(&self.path).expect("Failed to open turn data file")
    }

    /// Memory-maps the file.
    pub fn map(&self) -> MappedRegion {
        MappedRegion::open(&self.path).expect("Failed to map turn data file")
    }
}

/// Runs a test against a temporary file holding `store`.
pub fn with_turn_file<O, F, R>(store: &TurnStore<O>, checksum: u32, f: F) -> R
where
    O: Ownership,
    F: FnOnce(&TestTurnFile) -> R,
{
    let file = TestTurnFile::create(store, checksum);
    f(&file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use turndata_core::{EdgeId, LoadConfig};

    #[test]
    fn sample_store_has_one_gap_in_lane_data() {
        let store = sample_store();
        assert_eq!(store.len(), 3);
        assert!(store.has_lane_data(EdgeId::new(0)));
        assert!(!store.has_lane_data(EdgeId::new(1)));
        assert!(store.has_lane_data(EdgeId::new(2)));
    }

    #[test]
    fn generated_store_cycles_types() {
        let store = generated_store(60);
        assert_eq!(store.len(), 60);
        assert_eq!(store.lane_data_count(), 40);
        assert_eq!(
            store.turn_instruction(EdgeId::new(26)).turn_type(),
            TurnType::Sliproad
        );
    }

    #[test]
    fn test_file_round_trips() {
        with_turn_file(&sample_store(), SAMPLE_CHECKSUM, |file| {
            assert!(file.path().exists());
            let (loaded, checksum) =
                files::read_turn_data(&file.backend(), &LoadConfig::new()).unwrap();
            assert_eq!(checksum, SAMPLE_CHECKSUM);
            assert_eq!(loaded, sample_store());
        });
    }

    #[test]
    fn raw_file_is_written_verbatim() {
        let file = TestTurnFile::from_bytes(&[1, 2, 3]);
        assert_eq!(file.map().as_bytes(), &[1, 2, 3]);
    }
}
