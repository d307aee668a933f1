use crate::error::BinaryError;

/// Checked narrowing conversions used when a payload length or count that is
/// naturally a `usize` in memory needs to be stored as a fixed-width on-disk
/// field.
pub trait UsizeConversion {
    fn to_i32_checked(self) -> Result<i32, BinaryError>;
    fn to_i64_checked(self) -> Result<i64, BinaryError>;
}

impl UsizeConversion for usize {
    fn to_i32_checked(self) -> Result<i32, BinaryError> {
        i32::try_from(self).map_err(|_| BinaryError::Overflow)
    }

    fn to_i64_checked(self) -> Result<i64, BinaryError> {
        i64::try_from(self).map_err(|_| BinaryError::Overflow)
    }
}
