//! Error types for turn data operations.

use thiserror::Error;

/// Result type for turn data operations.
pub type TurnDataResult<T> = Result<T, TurnDataError>;

/// Errors that can occur while storing or loading turn data.
///
/// Out-of-range edge ids are not represented here: they are programming
/// errors and panic. Mutating a view is not representable at all, since
/// only the owning store has mutators.
#[derive(Debug, Error)]
pub enum TurnDataError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] turndata_storage::StorageError),

    /// The byte stream was truncated or malformed.
    #[error("codec error: {0}")]
    Codec(#[from] turndata_codec::CodecError),

    /// The persisted connectivity checksum differs from the caller's.
    ///
    /// The turn data file was built from a different graph than the one
    /// it is being loaded with.
    #[error("connectivity checksum mismatch: expected {expected:08x}, file has {actual:08x}")]
    ChecksumMismatch {
        /// Checksum recomputed by the caller.
        expected: u32,
        /// Checksum stored in the file.
        actual: u32,
    },

    /// Columns supplied to a store have different lengths.
    #[error("column {column} has {actual} entries, expected {expected}")]
    ColumnLengthMismatch {
        /// Name of the offending column.
        column: &'static str,
        /// Length of the first column.
        expected: usize,
        /// Length of the offending column.
        actual: usize,
    },

    /// The store holds more records than a section can describe.
    #[error("too many turn records: {count} exceeds limit of {max}")]
    TooManyRecords {
        /// Number of records.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
}

impl TurnDataError {
    /// Returns true if this error means the file does not belong to the
    /// graph it was paired with, as opposed to being unreadable.
    #[must_use]
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::ChecksumMismatch { .. })
    }
}
