//! Turn data files on top of storage backends.
//!
//! A turn data file holds exactly one section. Writing replaces whatever
//! the backend held before; loading checks the header against a
//! [`LoadConfig`] before touching the columns.

use crate::column::Ownership;
use crate::config::LoadConfig;
use crate::error::{TurnDataError, TurnDataResult};
use crate::layout::{TurnDataLayout, HEADER_SIZE};
use crate::serialization::{self, verify_checksum, SectionHeader};
use crate::store::{TurnDataContainer, TurnDataView, TurnStore};
use tracing::{debug, info};
use turndata_codec::{StreamReader, StreamWriter};
use turndata_storage::StorageBackend;

/// Writes `store` to `backend` as a turn data file and syncs it.
///
/// Any previous content of the backend is discarded. Returns the number of
/// bytes written.
///
/// # Errors
///
/// Returns a storage error if the backend fails, or
/// [`TurnDataError::TooManyRecords`] if the store cannot be serialized.
pub fn write_turn_data<B, O>(
    backend: &mut B,
    store: &TurnStore<O>,
    connectivity_checksum: u32,
) -> TurnDataResult<u64>
where
    B: StorageBackend + ?Sized,
    O: Ownership,
{
    let mut writer =
        StreamWriter::with_capacity(HEADER_SIZE + store.len() * TurnDataLayout::record_width());
    serialization::write(&mut writer, store, connectivity_checksum)?;
    let bytes = writer.into_bytes();

    backend.truncate(0)?;
    backend.append(&bytes)?;
    backend.flush()?;
    backend.sync()?;

    info!(
        records = store.len(),
        bytes = bytes.len(),
        checksum = connectivity_checksum,
        "turn data file written"
    );
    Ok(bytes.len() as u64)
}

/// Reads a turn data file from `backend` into an owning store.
///
/// Returns the store and the checksum stored in the file.
///
/// # Errors
///
/// See [`decode_turn_data`].
pub fn read_turn_data<B>(
    backend: &B,
    config: &LoadConfig,
) -> TurnDataResult<(TurnDataContainer, u32)>
where
    B: StorageBackend + ?Sized,
{
    let bytes = backend.read_all()?;
    decode_turn_data(&bytes, config)
}

/// Decodes a turn data file held in memory into an owning store.
///
/// # Errors
///
/// - [`TurnDataError::TooManyRecords`] if the header claims more than
///   `config.max_records` records
/// - [`TurnDataError::ChecksumMismatch`] if `config.expected_checksum` is
///   set and differs from the file's
/// - a codec error if the file is truncated, or has trailing bytes that
///   the config does not allow
pub fn decode_turn_data(
    bytes: &[u8],
    config: &LoadConfig,
) -> TurnDataResult<(TurnDataContainer, u32)> {
    let mut reader = StreamReader::new(bytes);
    let header = read_header(&mut reader, config)?;
    let store = serialization::read_body(&mut reader, &header)?;
    finish(reader, config)?;
    Ok((store, header.checksum))
}

/// Borrows a turn data file held in memory as a view, without copying.
///
/// `bytes` is usually a [`turndata_storage::MappedRegion`]; the view lives
/// as long as the mapping.
///
/// # Errors
///
/// Same as [`decode_turn_data`].
pub fn view_turn_data<'a>(
    bytes: &'a [u8],
    config: &LoadConfig,
) -> TurnDataResult<(TurnDataView<'a>, u32)> {
    let mut reader = StreamReader::new(bytes);
    let header = read_header(&mut reader, config)?;
    let view = serialization::read_view_body(&mut reader, &header)?;
    finish(reader, config)?;
    Ok((view, header.checksum))
}

/// Reads and validates a section header.
///
/// The checksum is compared before any column is read, so a file built
/// for another graph is rejected without decoding it.
fn read_header(reader: &mut StreamReader<'_>, config: &LoadConfig) -> TurnDataResult<SectionHeader> {
    let header = SectionHeader::read(reader)?;
    if header.count > config.max_records {
        return Err(TurnDataError::TooManyRecords {
            count: header.count as usize,
            max: config.max_records as usize,
        });
    }
    if let Some(expected) = config.expected_checksum {
        verify_checksum(expected, header.checksum)?;
    }
    Ok(header)
}

fn finish(reader: StreamReader<'_>, config: &LoadConfig) -> TurnDataResult<()> {
    if config.allow_trailing_bytes {
        if !reader.is_empty() {
            debug!(remaining = reader.remaining(), "ignoring bytes after turn data section");
        }
        return Ok(());
    }
    reader.finish()?;
    Ok(())
}
