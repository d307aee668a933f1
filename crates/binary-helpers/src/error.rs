use std::array::TryFromSliceError;
use thiserror::Error;

/// Errors raised while reading or writing fixed-width little-endian integers
/// through a byte slice.
#[derive(Error, Debug)]
pub enum BinaryError {
    #[error(
        "attempt to read {expected} bytes starting at offset {from_offset}, but the slice does not cover that range"
    )]
    SliceTooShort { from_offset: usize, expected: usize },
    #[error("error converting a byte slice to a fixed-size array")]
    SliceConversion(#[from] TryFromSliceError),
    #[error("value overflows the target integer type")]
    Overflow,
}
