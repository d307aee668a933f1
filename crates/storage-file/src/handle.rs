//! A byte-addressed random-access file handle.
//!
//! Every read or write is an absolute-offset operation; there is no cursor
//! state shared across calls, which is what lets a single [`FileHandle`] be
//! driven by header reads, node reads, and payload reads in any order
//! without one clobbering another's position.

use binary_helpers::BinaryError;
use binary_helpers::le::LittleEndianInteger;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::FileExt;
#[cfg(windows)]
use std::os::windows::fs::FileExt;

/// Byte-addressed, random-access handle over a single regular file.
///
/// Opens the file for reading and writing, creating it if it does not exist.
/// All operations seek (or use positioned reads/writes where the platform
/// provides them) to an absolute offset before transferring bytes; no method
/// relies on an implicit file cursor.
#[derive(Debug)]
pub struct FileHandle {
    file: File,
}

impl FileHandle {
    /// Opens `path` for reading and writing, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        Ok(Self { file })
    }

    /// Current length of the file in bytes.
    pub fn len(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    /// Reads exactly `buf.len()` bytes starting at `offset`.
    pub fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        Self::read_exact_at(&self.file, buf, offset)
    }

    /// Writes `buf` starting at `offset`, extending the file if necessary.
    pub fn write_at(&self, offset: u64, buf: &[u8]) -> io::Result<()> {
        Self::write_all_at(&self.file, buf, offset)
    }

    /// Reads a fixed-width little-endian integer at `offset`.
    pub fn read_int_at<T: LittleEndianInteger>(&self, offset: u64) -> io::Result<T> {
        let mut buf = vec![0u8; T::SIZE];
        self.read_at(offset, &mut buf)?;
        T::from_le(&buf).map_err(binary_error_to_io)
    }

    /// Writes a fixed-width little-endian integer at `offset`.
    pub fn write_int_at<T: LittleEndianInteger>(&self, offset: u64, value: T) -> io::Result<()> {
        let mut buf = vec![0u8; T::SIZE];
        value.to_le(&mut buf).map_err(binary_error_to_io)?;
        self.write_at(offset, &buf)
    }

    /// Flushes and syncs all buffered writes to disk.
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    #[cfg(unix)]
    fn read_exact_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<()> {
        file.read_exact_at(buf, offset)
    }

    #[cfg(windows)]
    fn read_exact_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<()> {
        let mut read = 0;
        while read < buf.len() {
            let n = file.seek_read(&mut buf[read..], offset + read as u64)?;
            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "short read from file",
                ));
            }
            read += n;
        }
        Ok(())
    }

    #[cfg(unix)]
    fn write_all_at(file: &File, buf: &[u8], offset: u64) -> io::Result<()> {
        file.write_all_at(buf, offset)
    }

    #[cfg(windows)]
    fn write_all_at(file: &File, buf: &[u8], offset: u64) -> io::Result<()> {
        let mut written = 0;
        while written < buf.len() {
            let n = file.seek_write(&buf[written..], offset + written as u64)?;
            if n == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "wrote 0 bytes"));
            }
            written += n;
        }
        Ok(())
    }
}

fn binary_error_to_io(err: BinaryError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}
