//! The public-facing engine: a persistent, disk-resident ordered set.

use crate::balance;
use crate::error::{EngineError, EngineResult};
use crate::queries;
use crate::walker::{self, Locate};
use avl_node::{Header, NodeAccessor, PayloadCodec};
use std::path::Path;
use std::sync::Mutex;
use storage_file::FileHandle;

/// Tunable knobs for [`Engine::open`].
///
/// Currently empty: this engine has no buffer pool, no page cache, and no
/// journal, so there is nothing to size. The type exists so a future knob
/// (e.g. `sync_on_insert`) can be added without breaking `open`'s signature,
/// the same way the teacher keeps a `StorageConfig` struct around even while
/// most of its fields are only read in one place.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    _private: (),
}

impl EngineOptions {
    /// The default options: nothing tunable beyond the path passed to
    /// [`Engine::open`].
    pub fn new() -> Self {
        Self::default()
    }
}

/// A persistent, disk-resident ordered set of `T`, balanced as an AVL tree
/// and addressed entirely through file offsets.
///
/// All state (topology, payloads, metadata) lives in the single file opened
/// by [`Engine::open`]; no significant portion of the tree is mirrored in
/// memory. A single coarse-grained mutex wraps every public operation, so an
/// `Engine` can be shared across threads (via `Arc`) without external
/// synchronization, at the cost of operations serializing on that mutex.
#[derive(Debug)]
pub struct Engine<T, C> {
    file: FileHandle,
    codec: C,
    lock: Mutex<()>,
    _value: std::marker::PhantomData<fn() -> T>,
}

impl<T, C> Engine<T, C>
where
    T: Ord + Clone,
    C: PayloadCodec<T>,
{
    /// Opens `path`, creating it if it does not exist. If the file is empty,
    /// the header is initialized; otherwise the existing header is trusted.
    pub fn open(path: impl AsRef<Path>, codec: C) -> EngineResult<Self> {
        Self::open_with(path, codec, EngineOptions::default())
    }

    /// Like [`Engine::open`], but with explicit [`EngineOptions`].
    pub fn open_with(path: impl AsRef<Path>, codec: C, _options: EngineOptions) -> EngineResult<Self> {
        let file = FileHandle::open(path)?;
        Header::init_if_empty(&file)?;

        Ok(Self {
            file,
            codec,
            lock: Mutex::new(()),
            _value: std::marker::PhantomData,
        })
    }

    /// Flushes and releases the underlying file handle.
    pub fn close(self) -> EngineResult<()> {
        let _guard = self.lock.lock().unwrap();
        self.file.sync()?;
        Ok(())
    }

    /// Inserts `value`. Returns `true` if it was newly inserted, `false` if
    /// an equal value was already present (in which case the file's byte
    /// image is left unchanged).
    pub fn add(&self, value: T) -> EngineResult<bool> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);

        match walker::locate(&header, &nodes, &self.codec, &value)? {
            Locate::Present { .. } => Ok(false),
            Locate::EmptyRoot { .. } => {
                let offset = crate::allocator::allocate_node(&header, &nodes, &self.codec, &value)?;
                header.set_count(1)?;
                balance::rebalance_path(&header, &nodes, vec![offset])?;
                tracing::debug!(offset, "inserted first element");
                Ok(true)
            }
            Locate::MissingLeft { mut path } => {
                let parent = *path.last().expect("path is non-empty for MissingLeft");
                let offset = crate::allocator::allocate_node(&header, &nodes, &self.codec, &value)?;
                nodes.set_left(parent, offset)?;
                path.push(offset);
                balance::rebalance_path(&header, &nodes, path)?;
                header.set_count(header.count()? + 1)?;
                Ok(true)
            }
            Locate::MissingRight { mut path } => {
                let parent = *path.last().expect("path is non-empty for MissingRight");
                let offset = crate::allocator::allocate_node(&header, &nodes, &self.codec, &value)?;
                nodes.set_right(parent, offset)?;
                path.push(offset);
                balance::rebalance_path(&header, &nodes, path)?;
                header.set_count(header.count()? + 1)?;
                Ok(true)
            }
        }
    }

    /// `true` iff an equal value is already stored.
    pub fn contains(&self, value: &T) -> EngineResult<bool> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);
        Ok(matches!(
            walker::locate(&header, &nodes, &self.codec, value)?,
            Locate::Present { .. }
        ))
    }

    /// Number of elements currently stored.
    pub fn size(&self) -> EngineResult<i64> {
        let _guard = self.lock.lock().unwrap();
        Ok(Header::new(&self.file).count()?)
    }

    /// `true` iff [`Engine::size`] is zero.
    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.size()? == 0)
    }

    /// The minimum stored value.
    ///
    /// # Errors
    /// Returns [`EngineError::NoSuchElement`] if the set is empty.
    pub fn first(&self) -> EngineResult<T> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);
        queries::first(&header, &nodes, &self.codec)?.ok_or(EngineError::NoSuchElement)
    }

    /// The maximum stored value.
    ///
    /// # Errors
    /// Returns [`EngineError::NoSuchElement`] if the set is empty.
    pub fn last(&self) -> EngineResult<T> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);
        queries::last(&header, &nodes, &self.codec)?.ok_or(EngineError::NoSuchElement)
    }

    /// The smallest stored value strictly greater than `value`.
    pub fn higher(&self, value: &T) -> EngineResult<Option<T>> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);
        queries::higher(&header, &nodes, &self.codec, value)
    }

    /// `value` itself if stored, otherwise its strict successor.
    pub fn ceiling(&self, value: &T) -> EngineResult<Option<T>> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);
        queries::ceiling(&header, &nodes, &self.codec, value)
    }

    /// `value` itself if stored, otherwise its strict predecessor.
    pub fn floor(&self, value: &T) -> EngineResult<Option<T>> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);
        queries::floor(&header, &nodes, &self.codec, value)
    }

    /// Starts an in-order iterator over the stored values.
    pub fn iter(&self) -> crate::iter::OrderedIter<'_, T, C> {
        crate::iter::OrderedIter::new(self)
    }

    /// Removal is explicitly unsupported: the allocator is append-only.
    pub fn remove(&self, _value: &T) -> EngineResult<bool> {
        Err(EngineError::Unsupported { op: "remove" })
    }

    /// Bulk removal is explicitly unsupported.
    pub fn remove_all<I: IntoIterator<Item = T>>(&self, _values: I) -> EngineResult<bool> {
        Err(EngineError::Unsupported { op: "removeAll" })
    }

    /// Retention (removing everything not in the given set) is explicitly
    /// unsupported.
    pub fn retain_all<I: IntoIterator<Item = T>>(&self, _values: I) -> EngineResult<bool> {
        Err(EngineError::Unsupported { op: "retainAll" })
    }

    /// Clearing the set is explicitly unsupported: it would require
    /// compaction or truncation this engine does not provide.
    pub fn clear(&self) -> EngineResult<()> {
        Err(EngineError::Unsupported { op: "clear" })
    }

    /// Bulk extraction into an in-memory array is explicitly unsupported —
    /// defeats the memory-minimality goal this engine exists for.
    pub fn to_array(&self) -> EngineResult<Vec<T>> {
        Err(EngineError::Unsupported { op: "toArray" })
    }

    /// Bulk membership testing is explicitly unsupported.
    pub fn contains_all<I: IntoIterator<Item = T>>(&self, _values: I) -> EngineResult<bool> {
        Err(EngineError::Unsupported { op: "containsAll" })
    }

    /// Runs `f` with exclusive access to the header, node accessor, and
    /// codec, under the engine's single coarse-grained lock. Used by
    /// [`crate::iter::OrderedIter`], which needs the same locked view the
    /// other public operations get.
    pub(crate) fn locked<R>(
        &self,
        f: impl FnOnce(&Header<'_>, &NodeAccessor<'_>, &C) -> EngineResult<R>,
    ) -> EngineResult<R> {
        let _guard = self.lock.lock().unwrap();
        let header = Header::new(&self.file);
        let nodes = NodeAccessor::new(&self.file);
        f(&header, &nodes, &self.codec)
    }
}
