use binary_helpers::BinaryError;
use thiserror::Error;

/// Errors raised while reading or writing the header or node records that sit
/// directly on top of a [`storage_file::FileHandle`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file I/O failure")]
    Io(#[from] std::io::Error),
    #[error("fixed-width field could not be decoded")]
    Binary(#[from] BinaryError),
    #[error("attempted to dereference the absent-child sentinel offset")]
    DereferencedAbsent,
}
