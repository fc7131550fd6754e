//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while reading a byte stream.
///
/// Writing into a [`crate::StreamWriter`] cannot fail; every variant here
/// describes a truncated or malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The stream ended before a read could be satisfied.
    #[error("unexpected end of stream: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes left in the stream.
        remaining: usize,
    },

    /// Bytes were left over after the last expected value.
    #[error("{remaining} trailing bytes after end of section")]
    TrailingBytes {
        /// Number of unread bytes.
        remaining: usize,
    },

    /// An array length does not fit in the address space.
    #[error("array of {count} elements of width {width} overflows usize")]
    LengthOverflow {
        /// Claimed element count.
        count: usize,
        /// Width of one element in bytes.
        width: usize,
    },

    /// A value or buffer is not valid for the requested type.
    #[error("invalid value: {message}")]
    InvalidValue {
        /// Description of the problem.
        message: String,
    },
}

impl CodecError {
    /// Create an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
        }
    }
}
