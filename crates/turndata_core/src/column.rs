//! Column buffers and ownership modes.
//!
//! A turn store is generic over an [`Ownership`] mode, which picks the
//! buffer type used for every column:
//!
//! | Mode | Buffer | Mutable |
//! |---|---|---|
//! | [`Owned`] | `Vec<T>` | yes |
//! | [`View`] | [`ColumnView`] into one contiguous section | no |
//! | [`External`] | [`ColumnView`] over independently supplied buffers | no |
//!
//! All reads go through the [`Column`] trait, so the read path is written
//! once for every mode.

use std::fmt;
use std::marker::PhantomData;
use turndata_codec::{CodecError, CodecResult, FixedWidth, StreamWriter};

/// Read access to a column of fixed-width values.
pub trait Column<T: FixedWidth> {
    /// Number of values in the column.
    fn len(&self) -> usize;

    /// Returns true if the column holds no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> T;

    /// Appends the encoded column to `writer`.
    fn write_to(&self, writer: &mut StreamWriter);
}

impl<T: FixedWidth> Column<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn write_to(&self, writer: &mut StreamWriter) {
        writer.write_values(self.iter().copied());
    }
}

/// A borrowed column decoded in place from little-endian bytes.
///
/// No alignment is required of the backing memory, so a view can point
/// anywhere inside a memory-mapped file.
pub struct ColumnView<'a, T> {
    bytes: &'a [u8],
    _marker: PhantomData<T>,
}

impl<'a, T: FixedWidth> ColumnView<'a, T> {
    /// Wraps encoded bytes as a column.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidValue`] if the length of `bytes` is not
    /// a multiple of `T::WIDTH`.
    pub fn new(bytes: &'a [u8]) -> CodecResult<Self> {
        if bytes.len() % T::WIDTH != 0 {
            return Err(CodecError::invalid_value(format!(
                "column buffer of {} bytes is not a multiple of element width {}",
                bytes.len(),
                T::WIDTH
            )));
        }
        Ok(Self {
            bytes,
            _marker: PhantomData,
        })
    }

    /// Returns the encoded bytes backing this column.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<T: FixedWidth> Column<T> for ColumnView<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.bytes.len() / T::WIDTH
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        let start = index * T::WIDTH;
        T::read_le(&self.bytes[start..start + T::WIDTH])
    }

    fn write_to(&self, writer: &mut StreamWriter) {
        writer.write_raw(self.bytes);
    }
}

impl<T> Clone for ColumnView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnView<'_, T> {}

impl<T> Default for ColumnView<'_, T> {
    fn default() -> Self {
        Self {
            bytes: &[],
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ColumnView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnView")
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// An ownership mode for turn store columns.
pub trait Ownership {
    /// Column buffer holding values of type `T`.
    type Buffer<T: FixedWidth>: Column<T> + Clone + Default + fmt::Debug + Send + Sync;

    /// Short name used in logs and debug output.
    const NAME: &'static str;
}

/// Heap-owned, growable columns. The only mutable mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Owned;

impl Ownership for Owned {
    type Buffer<T: FixedWidth> = Vec<T>;
    const NAME: &'static str = "owned";
}

/// Columns borrowed from one contiguous serialized section.
#[derive(Debug, Clone, Copy, Default)]
pub struct View<'a>(PhantomData<&'a [u8]>);

impl<'a> Ownership for View<'a> {
    type Buffer<T: FixedWidth> = ColumnView<'a, T>;
    const NAME: &'static str = "view";
}

/// Columns borrowed from independently supplied buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct External<'a>(PhantomData<&'a [u8]>);

impl<'a> Ownership for External<'a> {
    type Buffer<T: FixedWidth> = ColumnView<'a, T>;
    const NAME: &'static str = "external";
}
