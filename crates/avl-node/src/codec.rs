//! Converts values of the element type to and from the self-describing byte
//! blob stored as a node's payload.
//!
//! The engine only needs two things from a codec: the encoded length (to
//! size the payload before writing) and the fact that `decode(encode(v))`
//! compares equal to `v` under the element's ordering. Anything satisfying
//! [`PayloadCodec`] can plug in; [`FixedIntCodec`] and [`Utf8Codec`] cover
//! the common cases out of the box.

use binary_helpers::le::LittleEndianInteger;
use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;
use std::string::FromUtf8Error;

/// Encodes/decodes a value of type `T` to/from a byte blob.
///
/// Implementations must be deterministic, and `decode(encode(v))` must equal
/// `v` under `T`'s own notion of equality/ordering.
pub trait PayloadCodec<T> {
    /// Error type surfaced when encoding or decoding fails.
    type Error: StdError + Send + Sync + 'static;

    /// Encodes `value` into a self-contained byte blob.
    fn encode(&self, value: &T) -> Result<Vec<u8>, Self::Error>;

    /// Decodes a byte blob previously produced by [`encode`](Self::encode).
    fn decode(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}

/// Error raised by [`FixedIntCodec`] when a stored payload has the wrong
/// width for the integer type it is being decoded into.
#[derive(Debug)]
pub struct FixedIntCodecError {
    expected: usize,
    actual: usize,
}

impl fmt::Display for FixedIntCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a {}-byte payload, found {} bytes",
            self.expected, self.actual
        )
    }
}

impl StdError for FixedIntCodecError {}

/// Codec for any fixed-width little-endian integer type (`i32`, `i64`, `u32`,
/// `u64`, ...). Encodes to exactly `T::SIZE` bytes, which doubles as a
/// zero-allocation way to fill the payload-length field.
#[derive(Debug, Default)]
pub struct FixedIntCodec<T>(PhantomData<T>);

impl<T> FixedIntCodec<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: LittleEndianInteger> PayloadCodec<T> for FixedIntCodec<T> {
    type Error = FixedIntCodecError;

    fn encode(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        let mut buf = vec![0u8; T::SIZE];
        (*value).to_le(&mut buf).map_err(|_| FixedIntCodecError {
            expected: T::SIZE,
            actual: buf.len(),
        })?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        T::from_le(bytes).map_err(|_| FixedIntCodecError {
            expected: T::SIZE,
            actual: bytes.len(),
        })
    }
}

/// Codec for `String` values, encoded as raw UTF-8 bytes (the payload length
/// field already carries the byte count, so no extra length prefix is
/// needed inside the blob itself).
#[derive(Debug, Default)]
pub struct Utf8Codec;

impl PayloadCodec<String> for Utf8Codec {
    type Error = FromUtf8Error;

    fn encode(&self, value: &String) -> Result<Vec<u8>, Self::Error> {
        Ok(value.as_bytes().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, Self::Error> {
        String::from_utf8(bytes.to_vec())
    }
}
