use crate::error::BinaryError;

/// A trait for fixed-width integer types that can be read from and written to
/// a byte slice in little-endian format.
///
/// Implemented for the signed and unsigned integer widths this engine's file
/// format actually uses (`i32`, `i64`, plus `u32`/`u64` for callers that
/// prefer unsigned codecs). Adding a width means adding one
/// `impl_little_endian_integer!` line.
pub trait LittleEndianInteger: Sized + Copy {
    /// The size of the type in bytes.
    const SIZE: usize;

    /// Converts a slice of exactly `Self::SIZE` little-endian bytes into `Self`.
    fn from_le(source_bytes: &[u8]) -> Result<Self, BinaryError>;

    /// Serializes `self` into `target_buffer`, which must be exactly
    /// `Self::SIZE` bytes long.
    fn to_le(self, target_buffer: &mut [u8]) -> Result<(), BinaryError>;
}

macro_rules! impl_little_endian_integer {
    ($t:ty) => {
        impl LittleEndianInteger for $t {
            const SIZE: usize = std::mem::size_of::<$t>();

            fn from_le(source_bytes: &[u8]) -> Result<Self, BinaryError> {
                if source_bytes.len() != Self::SIZE {
                    return Err(BinaryError::SliceTooShort {
                        from_offset: 0,
                        expected: Self::SIZE,
                    });
                }

                Ok(<$t>::from_le_bytes(source_bytes.try_into()?))
            }

            fn to_le(self, target_buffer: &mut [u8]) -> Result<(), BinaryError> {
                let bytes = self.to_le_bytes();

                if target_buffer.len() != bytes.len() {
                    return Err(BinaryError::SliceTooShort {
                        from_offset: 0,
                        expected: bytes.len(),
                    });
                }

                target_buffer.copy_from_slice(&bytes);
                Ok(())
            }
        }
    };
}

impl_little_endian_integer!(u32);
impl_little_endian_integer!(u64);
impl_little_endian_integer!(i32);
impl_little_endian_integer!(i64);

/// Reads a `T` out of `bytes` starting at `start_offset`.
pub fn read_le<T: LittleEndianInteger>(
    bytes: &[u8],
    start_offset: usize,
) -> Result<T, BinaryError> {
    let Some(slice) = bytes.get(start_offset..start_offset + T::SIZE) else {
        return Err(BinaryError::SliceTooShort {
            from_offset: start_offset,
            expected: T::SIZE,
        });
    };

    T::from_le(slice)
}

/// Writes `value` into `bytes` starting at `start_offset`.
pub fn write_le<T: LittleEndianInteger>(
    bytes: &mut [u8],
    start_offset: usize,
    value: T,
) -> Result<(), BinaryError> {
    let Some(slice) = bytes.get_mut(start_offset..start_offset + T::SIZE) else {
        return Err(BinaryError::SliceTooShort {
            from_offset: start_offset,
            expected: T::SIZE,
        });
    };

    value.to_le(slice)
}
