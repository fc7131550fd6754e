//! Fixed-width value encoding.

use std::fmt;

/// A value with a fixed little-endian encoding of [`Self::WIDTH`] bytes.
///
/// Implementations must round-trip: `read_le` of the bytes produced by
/// `write_le` returns the original value. Both functions are only ever
/// handed slices of at least `WIDTH` bytes.
pub trait FixedWidth: Copy + fmt::Debug + Send + Sync + 'static {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Writes the value into the first `WIDTH` bytes of `out`.
    fn write_le(self, out: &mut [u8]);

    /// Reads a value from the first `WIDTH` bytes of `bytes`.
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {$(
        impl FixedWidth for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn write_le(self, out: &mut [u8]) {
                out[..Self::WIDTH].copy_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$ty>()];
                buf.copy_from_slice(&bytes[..Self::WIDTH]);
                <$ty>::from_le_bytes(buf)
            }
        }
    )*};
}

impl_fixed_width!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn widths() {
        assert_eq!(u8::WIDTH, 1);
        assert_eq!(u16::WIDTH, 2);
        assert_eq!(u32::WIDTH, 4);
        assert_eq!(u64::WIDTH, 8);
    }

    #[test]
    fn little_endian_layout() {
        let mut out = [0u8; 4];
        0x0102_0304u32.write_le(&mut out);
        assert_eq!(out, [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn read_ignores_bytes_past_width() {
        assert_eq!(u16::read_le(&[0x34, 0x12, 0xff, 0xff]), 0x1234);
    }

    proptest! {
        #[test]
        fn u16_survives_encoding(value in any::<u16>()) {
            let mut out = [0u8; 2];
            value.write_le(&mut out);
            prop_assert_eq!(u16::read_le(&out), value);
        }
    }
}
