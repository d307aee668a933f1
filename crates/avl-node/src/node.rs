//! Reads and writes the fixed-layout prefix (and variable-length payload
//! tail) of a single node record.
//!
//! # Node Layout
//!
//! | rel. offset | size | field               |
//! |-------------|------|---------------------|
//! | +0          | 8    | left child offset   |
//! | +8          | 8    | right child offset  |
//! | +16         | 4    | subtree height       |
//! | +20         | 4    | payload byte length  |
//! | +24         | P    | payload bytes        |
//!
//! A node's total on-disk size is `NODE_HEADER_SIZE + P` bytes.
//!
//! [`ABSENT`] (`-1`) is the sentinel for "no child"/"no node here". Every
//! read accessor tolerates it; every write accessor rejects it as a target
//! offset.

use crate::error::StoreError;
use binary_helpers::conversions::UsizeConversion;
use binary_helpers::le::{read_le, write_le};
use storage_file::FileHandle;

/// Sentinel offset meaning "absent" — no child, no node.
pub const ABSENT: i64 = -1;

/// Conventional height of an absent child.
pub const ABSENT_HEIGHT: i32 = -1;

/// Byte offset of the left child pointer, relative to a node's start.
pub const LEFT_OFFSET: u64 = 0;
/// Byte offset of the right child pointer, relative to a node's start.
pub const RIGHT_OFFSET: u64 = 8;
/// Byte offset of the height field, relative to a node's start.
pub const HEIGHT_OFFSET: u64 = 16;
/// Byte offset of the payload length field, relative to a node's start.
pub const PAYLOAD_LEN_OFFSET: u64 = 20;
/// Byte offset of the payload bytes, relative to a node's start.
pub const PAYLOAD_OFFSET: u64 = 24;
/// Size of the fixed-layout prefix, before the payload bytes.
pub const NODE_HEADER_SIZE: u64 = 24;

/// A stateless view that reads/writes node records through a [`FileHandle`].
#[derive(Debug)]
pub struct NodeAccessor<'f> {
    file: &'f FileHandle,
}

impl<'f> NodeAccessor<'f> {
    pub fn new(file: &'f FileHandle) -> Self {
        Self { file }
    }

    /// Left child offset, or [`ABSENT`] if `at` is [`ABSENT`].
    pub fn left(&self, at: i64) -> Result<i64, StoreError> {
        if at == ABSENT {
            return Ok(ABSENT);
        }
        self.read_i64(at as u64 + LEFT_OFFSET)
    }

    /// Right child offset, or [`ABSENT`] if `at` is [`ABSENT`].
    pub fn right(&self, at: i64) -> Result<i64, StoreError> {
        if at == ABSENT {
            return Ok(ABSENT);
        }
        self.read_i64(at as u64 + RIGHT_OFFSET)
    }

    /// Sets the left child pointer of the node at `at`.
    pub fn set_left(&self, at: i64, value: i64) -> Result<(), StoreError> {
        self.require_present(at)?;
        self.write_i64(at as u64 + LEFT_OFFSET, value)
    }

    /// Sets the right child pointer of the node at `at`.
    pub fn set_right(&self, at: i64, value: i64) -> Result<(), StoreError> {
        self.require_present(at)?;
        self.write_i64(at as u64 + RIGHT_OFFSET, value)
    }

    /// Subtree height, or [`ABSENT_HEIGHT`] if `at` is [`ABSENT`].
    pub fn height(&self, at: i64) -> Result<i32, StoreError> {
        if at == ABSENT {
            return Ok(ABSENT_HEIGHT);
        }
        self.read_i32(at as u64 + HEIGHT_OFFSET)
    }

    /// Sets the subtree height of the node at `at`.
    pub fn set_height(&self, at: i64, height: i32) -> Result<(), StoreError> {
        self.require_present(at)?;
        self.write_i32(at as u64 + HEIGHT_OFFSET, height)
    }

    /// Payload byte length, or `-1` if `at` is [`ABSENT`].
    pub fn payload_len(&self, at: i64) -> Result<i32, StoreError> {
        if at == ABSENT {
            return Ok(-1);
        }
        self.read_i32(at as u64 + PAYLOAD_LEN_OFFSET)
    }

    /// Reads the payload bytes of the node at `at`.
    pub fn read_payload(&self, at: i64) -> Result<Vec<u8>, StoreError> {
        self.require_present(at)?;
        let len = self.payload_len(at)?;
        let mut buf = vec![0u8; len.max(0) as usize];
        self.file.read_at(at as u64 + PAYLOAD_OFFSET, &mut buf)?;
        Ok(buf)
    }

    /// Writes the full node record (child pointers, height, payload) for a
    /// brand-new node at `at`, returning the offset immediately past its
    /// last byte (the allocator's next `next_free`).
    ///
    /// Used only by the allocator: payload bytes are write-once, so this is
    /// the single call that brings a node fully into existence.
    pub fn write_new_node(
        &self,
        at: i64,
        left: i64,
        right: i64,
        height: i32,
        payload: &[u8],
    ) -> Result<i64, StoreError> {
        self.require_present(at)?;
        self.write_i64(at as u64 + LEFT_OFFSET, left)?;
        self.write_i64(at as u64 + RIGHT_OFFSET, right)?;
        self.write_i32(at as u64 + HEIGHT_OFFSET, height)?;
        let payload_len = payload.len().to_i32_checked()?;
        self.write_i32(at as u64 + PAYLOAD_LEN_OFFSET, payload_len)?;
        self.file.write_at(at as u64 + PAYLOAD_OFFSET, payload)?;
        Ok(at + NODE_HEADER_SIZE as i64 + payload.len() as i64)
    }

    fn require_present(&self, at: i64) -> Result<(), StoreError> {
        if at == ABSENT {
            return Err(StoreError::DereferencedAbsent);
        }
        Ok(())
    }

    fn read_i64(&self, offset: u64) -> Result<i64, StoreError> {
        let mut buf = [0u8; 8];
        self.file.read_at(offset, &mut buf)?;
        Ok(read_le::<i64>(&buf, 0)?)
    }

    fn write_i64(&self, offset: u64, value: i64) -> Result<(), StoreError> {
        let mut buf = [0u8; 8];
        write_le::<i64>(&mut buf, 0, value)?;
        self.file.write_at(offset, &buf)?;
        Ok(())
    }

    fn read_i32(&self, offset: u64) -> Result<i32, StoreError> {
        let mut buf = [0u8; 4];
        self.file.read_at(offset, &mut buf)?;
        Ok(read_le::<i32>(&buf, 0)?)
    }

    fn write_i32(&self, offset: u64, value: i32) -> Result<(), StoreError> {
        let mut buf = [0u8; 4];
        write_le::<i32>(&mut buf, 0, value)?;
        self.file.write_at(offset, &buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absent_reads_tolerate_the_sentinel() {
        let dir = tempdir().unwrap();
        let file = FileHandle::open(dir.path().join("t.bin")).unwrap();
        let nodes = NodeAccessor::new(&file);

        assert_eq!(nodes.left(ABSENT).unwrap(), ABSENT);
        assert_eq!(nodes.right(ABSENT).unwrap(), ABSENT);
        assert_eq!(nodes.height(ABSENT).unwrap(), ABSENT_HEIGHT);
        assert_eq!(nodes.payload_len(ABSENT).unwrap(), -1);
    }

    #[test]
    fn writes_to_absent_are_rejected() {
        let dir = tempdir().unwrap();
        let file = FileHandle::open(dir.path().join("t.bin")).unwrap();
        let nodes = NodeAccessor::new(&file);

        assert!(matches!(
            nodes.set_left(ABSENT, 24),
            Err(StoreError::DereferencedAbsent)
        ));
    }

    #[test]
    fn write_new_node_then_read_back() {
        let dir = tempdir().unwrap();
        let file = FileHandle::open(dir.path().join("t.bin")).unwrap();
        let nodes = NodeAccessor::new(&file);

        let tail = nodes.write_new_node(24, ABSENT, ABSENT, 0, b"hello").unwrap();

        assert_eq!(tail, 24 + NODE_HEADER_SIZE as i64 + 5);
        assert_eq!(nodes.left(24).unwrap(), ABSENT);
        assert_eq!(nodes.right(24).unwrap(), ABSENT);
        assert_eq!(nodes.height(24).unwrap(), 0);
        assert_eq!(nodes.payload_len(24).unwrap(), 5);
        assert_eq!(nodes.read_payload(24).unwrap(), b"hello");
    }

    #[test]
    fn set_left_and_right_update_child_pointers() {
        let dir = tempdir().unwrap();
        let file = FileHandle::open(dir.path().join("t.bin")).unwrap();
        let nodes = NodeAccessor::new(&file);

        nodes.write_new_node(24, ABSENT, ABSENT, 0, b"v").unwrap();
        nodes.set_left(24, 100).unwrap();
        nodes.set_right(24, 200).unwrap();
        nodes.set_height(24, 1).unwrap();

        assert_eq!(nodes.left(24).unwrap(), 100);
        assert_eq!(nodes.right(24).unwrap(), 200);
        assert_eq!(nodes.height(24).unwrap(), 1);
    }
}
