//! Owns the three fixed-position fields at the start of the file.
//!
//! # Header Layout
//!
//! The header occupies the first **24 bytes** of the file. All fields are
//! `i64`, little-endian.
//!
//! | Field        | Offset | Description                                   |
//! |--------------|--------|------------------------------------------------|
//! | `count`      | 0      | Number of elements currently in the set.        |
//! | `next_free`  | 8      | First unused byte, where the next node lands.   |
//! | `root`       | 16     | Offset of the root node (or the root sentinel). |
//!
//! Callers never cache these values across a mutating operation; every
//! access round-trips through the file so the header stays the single
//! source of truth (see the concurrency model in the crate root docs).

use crate::error::StoreError;
use binary_helpers::le::{read_le, write_le};
use paste::paste;
use storage_file::FileHandle;

/// Size of the header, in bytes.
pub const HEADER_SIZE: u64 = 24;

/// Byte offset at which the first node is written in a brand-new file; also
/// the root sentinel value while the set is empty.
pub const FIRST_NODE_OFFSET: i64 = HEADER_SIZE as i64;

/// A view over the header fields of an open file.
///
/// Stateless: every getter/setter performs an absolute-offset read or write
/// against the underlying [`FileHandle`] and returns immediately.
#[derive(Debug)]
pub struct Header<'f> {
    file: &'f FileHandle,
}

macro_rules! impl_header_accessors {
    ( $( $field_name:ident : $field_offset:expr ; )* ) => {
        paste! {
            $(
                #[doc = concat!("Byte offset of `", stringify!($field_name), "` within the header.")]
                pub const [<$field_name:upper _OFFSET>]: u64 = $field_offset;

                impl<'f> Header<'f> {
                    #[doc = concat!("Reads the `", stringify!($field_name), "` field.")]
                    pub fn [<$field_name>](&self) -> Result<i64, StoreError> {
                        let mut buf = [0u8; 8];
                        self.file.read_at([<$field_name:upper _OFFSET>], &mut buf)?;
                        Ok(read_le::<i64>(&buf, 0)?)
                    }

                    #[doc = concat!("Writes the `", stringify!($field_name), "` field.")]
                    pub fn [<set_ $field_name>](&self, value: i64) -> Result<(), StoreError> {
                        let mut buf = [0u8; 8];
                        write_le::<i64>(&mut buf, 0, value)?;
                        self.file.write_at([<$field_name:upper _OFFSET>], &buf)?;
                        Ok(())
                    }
                }
            )*
        }
    };
}

impl_header_accessors! {
    count: 0;
    next_free: 8;
    root: 16;
}

impl<'f> Header<'f> {
    /// Builds a header view over `file`.
    pub fn new(file: &'f FileHandle) -> Self {
        Self { file }
    }

    /// If `file` is empty, writes the initial header (count = 0, next_free =
    /// root = [`FIRST_NODE_OFFSET`]). If the file already has content, the
    /// existing header is trusted and left untouched.
    pub fn init_if_empty(file: &'f FileHandle) -> Result<(), StoreError> {
        if file.len()? == 0 {
            let header = Header::new(file);
            header.set_count(0)?;
            header.set_next_free(FIRST_NODE_OFFSET)?;
            header.set_root(FIRST_NODE_OFFSET)?;
        }
        Ok(())
    }

    /// `true` when the set holds no elements, i.e. `root == next_free`.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.root()? == self.next_free()?)
    }
}
