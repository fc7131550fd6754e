//! Reading and writing turn data sections.
//!
//! A section carries the connectivity checksum of the graph the turn data
//! was built for. The checksum is opaque here: writers pass it through,
//! readers hand it back, and the loader compares it with its own value
//! using [`verify_checksum`].

use crate::column::{Column, ColumnView, Ownership};
use crate::error::{TurnDataError, TurnDataResult};
use crate::instruction::TurnInstruction;
use crate::layout::TurnDataLayout;
use crate::store::{TurnDataContainer, TurnDataView, TurnStore};
use crate::types::{EntryClassId, LaneDataId, TurnBearing};
use tracing::{debug, trace, warn};
use turndata_codec::{StreamReader, StreamWriter};

/// The fixed-size prefix of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    /// Connectivity checksum of the paired graph.
    pub checksum: u32,
    /// Number of records in the section.
    pub count: u32,
}

impl SectionHeader {
    /// Reads a header from the stream.
    ///
    /// # Errors
    ///
    /// Returns a codec error if fewer than 8 bytes remain.
    pub fn read(reader: &mut StreamReader<'_>) -> TurnDataResult<Self> {
        let checksum = reader.read_u32()?;
        let count = reader.read_u32()?;
        Ok(Self { checksum, count })
    }

    /// Layout of the section this header describes.
    ///
    /// # Errors
    ///
    /// Returns a codec error if the section would not fit in memory.
    pub fn layout(&self) -> TurnDataResult<TurnDataLayout> {
        Ok(TurnDataLayout::new(self.count)?)
    }
}

/// Writes `store` and `connectivity_checksum` as one section.
///
/// Works for every ownership mode; borrowed columns are copied verbatim.
///
/// # Errors
///
/// Returns [`TurnDataError::TooManyRecords`] if the store holds more
/// records than a `u32` count can describe.
pub fn write<O: Ownership>(
    writer: &mut StreamWriter,
    store: &TurnStore<O>,
    connectivity_checksum: u32,
) -> TurnDataResult<()> {
    let count = u32::try_from(store.len()).map_err(|_| TurnDataError::TooManyRecords {
        count: store.len(),
        max: u32::MAX as usize,
    })?;
    let start = writer.position();

    writer.write_u32(connectivity_checksum);
    writer.write_u32(count);

    let columns = store.columns();
    columns.turn_instructions.write_to(writer);
    columns.lane_data_ids.write_to(writer);
    columns.entry_class_ids.write_to(writer);
    columns.pre_turn_bearings.write_to(writer);
    columns.post_turn_bearings.write_to(writer);

    debug!(
        count,
        bytes = writer.position() - start,
        mode = O::NAME,
        "wrote turn data section"
    );
    Ok(())
}

/// Reads one section into a new owning store.
///
/// Returns the store and the checksum found in the section. The reader is
/// left positioned after the section.
///
/// # Errors
///
/// Returns a codec error if the stream is truncated. No store is returned
/// on failure.
pub fn read(reader: &mut StreamReader<'_>) -> TurnDataResult<(TurnDataContainer, u32)> {
    let header = SectionHeader::read(reader)?;
    let store = read_body(reader, &header)?;
    Ok((store, header.checksum))
}

/// Reads the columns of a section whose header was already consumed.
///
/// # Errors
///
/// Returns a codec error if the stream is truncated.
pub fn read_body(
    reader: &mut StreamReader<'_>,
    header: &SectionHeader,
) -> TurnDataResult<TurnDataContainer> {
    let count = header.count as usize;
    let start = reader.position();

    let store = TurnDataContainer::from_columns(
        reader.read_array::<TurnInstruction>(count)?,
        reader.read_array::<LaneDataId>(count)?,
        reader.read_array::<EntryClassId>(count)?,
        reader.read_array::<TurnBearing>(count)?,
        reader.read_array::<TurnBearing>(count)?,
    )?;

    debug!(
        count,
        bytes = reader.position() - start,
        "read turn data section"
    );
    Ok(store)
}

/// Reads one section as a view borrowing the stream's bytes.
///
/// Nothing is copied: the returned view aliases the memory behind
/// `reader`, typically a memory-mapped file, for the lifetime `'a`.
///
/// # Errors
///
/// Returns a codec error if the stream is truncated.
pub fn read_view<'a>(reader: &mut StreamReader<'a>) -> TurnDataResult<(TurnDataView<'a>, u32)> {
    let header = SectionHeader::read(reader)?;
    let view = read_view_body(reader, &header)?;
    Ok((view, header.checksum))
}

/// Borrows the columns of a section whose header was already consumed.
///
/// # Errors
///
/// Returns a codec error if the stream is truncated.
pub fn read_view_body<'a>(
    reader: &mut StreamReader<'a>,
    header: &SectionHeader,
) -> TurnDataResult<TurnDataView<'a>> {
    let count = header.count as usize;
    let start = reader.position();

    let view = TurnDataView::from_columns(
        ColumnView::new(reader.read_array_bytes::<TurnInstruction>(count)?)?,
        ColumnView::new(reader.read_array_bytes::<LaneDataId>(count)?)?,
        ColumnView::new(reader.read_array_bytes::<EntryClassId>(count)?)?,
        ColumnView::new(reader.read_array_bytes::<TurnBearing>(count)?)?,
        ColumnView::new(reader.read_array_bytes::<TurnBearing>(count)?)?,
    )?;

    trace!(count, offset = start, "mapped turn data section");
    Ok(view)
}

/// Compares the caller's checksum with the one stored in a section.
///
/// # Errors
///
/// Returns [`TurnDataError::ChecksumMismatch`] if they differ, which means
/// the turn data and the graph were not built together.
pub fn verify_checksum(expected: u32, actual: u32) -> TurnDataResult<()> {
    if expected != actual {
        warn!(expected, actual, "turn data does not match graph");
        return Err(TurnDataError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}
