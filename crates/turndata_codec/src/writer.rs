//! Sequential stream writer.

use crate::fixed::FixedWidth;
use bytes::{BufMut, Bytes, BytesMut};

/// An append-only writer of fixed-width values.
///
/// Values are written back to back with no padding or framing, so the
/// layout of a stream is fully determined by the order of calls.
#[derive(Debug, Default)]
pub struct StreamWriter {
    buffer: BytesMut,
}

impl StreamWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new writer with the specified capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Write a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.put_u32_le(value);
    }

    /// Write a single fixed-width value.
    pub fn write<T: FixedWidth>(&mut self, value: T) {
        let start = self.buffer.len();
        self.buffer.resize(start + T::WIDTH, 0);
        value.write_le(&mut self.buffer[start..]);
    }

    /// Write a densely packed array of fixed-width values.
    ///
    /// No length prefix is written; callers record the count themselves.
    pub fn write_values<T, I>(&mut self, values: I)
    where
        T: FixedWidth,
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        self.buffer.reserve(values.size_hint().0 * T::WIDTH);
        for value in values {
            self.write(value);
        }
    }

    /// Write bytes that are already encoded.
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buffer.put_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Get a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume this writer and return the written bytes.
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }
}
