//! Sequential stream reader.

use crate::error::{CodecError, CodecResult};
use crate::fixed::FixedWidth;

/// A cursor over an in-memory byte stream.
///
/// The reader never copies unless asked to: [`StreamReader::read_raw`] and
/// [`StreamReader::read_array_bytes`] hand out slices borrowed from the
/// input for the full lifetime `'a`, which is what zero-copy loading over a
/// memory-mapped file relies on.
pub struct StreamReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> StreamReader<'a> {
    /// Create a new reader for the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Check if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Borrow the next `len` bytes.
    #[inline]
    pub fn read_raw(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::UnexpectedEof {
                needed: len,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Read a single fixed-width value.
    #[inline]
    pub fn read<T: FixedWidth>(&mut self) -> CodecResult<T> {
        self.read_raw(T::WIDTH).map(T::read_le)
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> CodecResult<u32> {
        self.read::<u32>()
    }

    /// Borrow the encoded bytes of an array of `count` values.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LengthOverflow`] if `count * T::WIDTH` does not
    /// fit in `usize`, or [`CodecError::UnexpectedEof`] if the stream is
    /// shorter than the array.
    pub fn read_array_bytes<T: FixedWidth>(&mut self, count: usize) -> CodecResult<&'a [u8]> {
        let len = count
            .checked_mul(T::WIDTH)
            .ok_or(CodecError::LengthOverflow {
                count,
                width: T::WIDTH,
            })?;
        self.read_raw(len)
    }

    /// Read an array of `count` values into a new vector.
    ///
    /// The length is validated against the stream before allocating.
    pub fn read_array<T: FixedWidth>(&mut self, count: usize) -> CodecResult<Vec<T>> {
        let bytes = self.read_array_bytes::<T>(count)?;
        Ok(bytes.chunks_exact(T::WIDTH).map(T::read_le).collect())
    }

    /// Skip `len` bytes.
    pub fn skip(&mut self, len: usize) -> CodecResult<()> {
        self.read_raw(len).map(|_| ())
    }

    /// Get remaining bytes without consuming them.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Consume the reader, failing if any bytes were left unread.
    pub fn finish(self) -> CodecResult<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(CodecError::TrailingBytes { remaining }),
        }
    }
}
