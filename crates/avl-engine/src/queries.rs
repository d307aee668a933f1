//! Ordered neighbor queries: `first`, `last`, `higher`, `ceiling`, `floor`.
//! Each is a recursive-in-spirit descent from the root, implemented
//! iteratively so it runs in O(1) working memory beyond the candidate slot.

use crate::error::{EngineResult, codec_err};
use avl_node::{ABSENT, Header, NodeAccessor, PayloadCodec};
use std::cmp::Ordering;

/// Leftmost (minimum) value, or `None` if the set is empty.
pub fn first<T, C>(header: &Header<'_>, nodes: &NodeAccessor<'_>, codec: &C) -> EngineResult<Option<T>>
where
    C: PayloadCodec<T>,
{
    if header.is_empty()? {
        return Ok(None);
    }

    let mut current = header.root()?;
    loop {
        let left = nodes.left(current)?;
        if left == ABSENT {
            break;
        }
        current = left;
    }

    Ok(Some(decode_at(nodes, codec, current)?))
}

/// Rightmost (maximum) value, or `None` if the set is empty.
pub fn last<T, C>(header: &Header<'_>, nodes: &NodeAccessor<'_>, codec: &C) -> EngineResult<Option<T>>
where
    C: PayloadCodec<T>,
{
    if header.is_empty()? {
        return Ok(None);
    }

    let mut current = header.root()?;
    loop {
        let right = nodes.right(current)?;
        if right == ABSENT {
            break;
        }
        current = right;
    }

    Ok(Some(decode_at(nodes, codec, current)?))
}

/// Strict successor of `value`: the smallest stored value greater than
/// `value`, or `None` if no such value exists.
pub fn higher<T, C>(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    codec: &C,
    value: &T,
) -> EngineResult<Option<T>>
where
    T: Ord,
    C: PayloadCodec<T>,
{
    if header.is_empty()? {
        return Ok(None);
    }

    let mut current = header.root()?;
    let mut candidate = ABSENT;

    while current != ABSENT {
        let stored = decode_at(nodes, codec, current)?;
        match stored.cmp(value) {
            Ordering::Less | Ordering::Equal => current = nodes.right(current)?,
            Ordering::Greater => {
                candidate = current;
                current = nodes.left(current)?;
            }
        }
    }

    resolve_candidate(nodes, codec, candidate)
}

/// Non-strict successor of `value`: `value` itself if stored, otherwise the
/// strict successor.
pub fn ceiling<T, C>(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    codec: &C,
    value: &T,
) -> EngineResult<Option<T>>
where
    T: Ord,
    C: PayloadCodec<T>,
{
    if header.is_empty()? {
        return Ok(None);
    }

    let mut current = header.root()?;
    let mut candidate = ABSENT;

    while current != ABSENT {
        let stored = decode_at(nodes, codec, current)?;
        match stored.cmp(value) {
            Ordering::Equal => return Ok(Some(stored)),
            Ordering::Less => current = nodes.right(current)?,
            Ordering::Greater => {
                candidate = current;
                current = nodes.left(current)?;
            }
        }
    }

    resolve_candidate(nodes, codec, candidate)
}

/// Non-strict predecessor of `value`: `value` itself if stored, otherwise
/// the strict predecessor.
pub fn floor<T, C>(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    codec: &C,
    value: &T,
) -> EngineResult<Option<T>>
where
    T: Ord,
    C: PayloadCodec<T>,
{
    if header.is_empty()? {
        return Ok(None);
    }

    let mut current = header.root()?;
    let mut candidate = ABSENT;

    while current != ABSENT {
        let stored = decode_at(nodes, codec, current)?;
        match stored.cmp(value) {
            Ordering::Equal => return Ok(Some(stored)),
            Ordering::Greater => current = nodes.left(current)?,
            Ordering::Less => {
                candidate = current;
                current = nodes.right(current)?;
            }
        }
    }

    resolve_candidate(nodes, codec, candidate)
}

fn decode_at<T, C>(nodes: &NodeAccessor<'_>, codec: &C, at: i64) -> EngineResult<T>
where
    C: PayloadCodec<T>,
{
    let payload = nodes.read_payload(at)?;
    codec.decode(&payload).map_err(codec_err("query: decode"))
}

fn resolve_candidate<T, C>(
    nodes: &NodeAccessor<'_>,
    codec: &C,
    candidate: i64,
) -> EngineResult<Option<T>>
where
    C: PayloadCodec<T>,
{
    if candidate == ABSENT {
        Ok(None)
    } else {
        Ok(Some(decode_at(nodes, codec, candidate)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::allocate_node;
    use crate::walker::{self, Locate};
    use avl_node::FixedIntCodec;
    use storage_file::FileHandle;
    use tempfile::tempdir;

    /// Populates a fresh file with `{50, 100, 150, 200}`, matching S6 from
    /// the spec's scenario list.
    fn populate_s6() -> (tempfile::TempDir, FileHandle) {
        let dir = tempdir().unwrap();
        let file = FileHandle::open(dir.path().join("t.bin")).unwrap();
        Header::init_if_empty(&file).unwrap();

        let header = Header::new(&file);
        let nodes = NodeAccessor::new(&file);
        let codec = FixedIntCodec::<i64>::new();

        for value in [50i64, 100, 150, 200] {
            match walker::locate(&header, &nodes, &codec, &value).unwrap() {
                Locate::EmptyRoot { .. } => {
                    let offset = allocate_node(&header, &nodes, &codec, &value).unwrap();
                    header.set_count(1).unwrap();
                    crate::balance::rebalance_path(&header, &nodes, vec![offset]).unwrap();
                }
                Locate::MissingLeft { mut path } => {
                    let parent = *path.last().unwrap();
                    let offset = allocate_node(&header, &nodes, &codec, &value).unwrap();
                    nodes.set_left(parent, offset).unwrap();
                    path.push(offset);
                    let count = header.count().unwrap();
                    crate::balance::rebalance_path(&header, &nodes, path).unwrap();
                    header.set_count(count + 1).unwrap();
                }
                Locate::MissingRight { mut path } => {
                    let parent = *path.last().unwrap();
                    let offset = allocate_node(&header, &nodes, &codec, &value).unwrap();
                    nodes.set_right(parent, offset).unwrap();
                    path.push(offset);
                    let count = header.count().unwrap();
                    crate::balance::rebalance_path(&header, &nodes, path).unwrap();
                    header.set_count(count + 1).unwrap();
                }
                Locate::Present { .. } => unreachable!("values are distinct"),
            }
        }

        (dir, file)
    }

    #[test]
    fn neighbor_edges_match_s6() {
        let (_dir, file) = populate_s6();
        let header = Header::new(&file);
        let nodes = NodeAccessor::new(&file);
        let codec = FixedIntCodec::<i64>::new();

        assert_eq!(higher(&header, &nodes, &codec, &100i64).unwrap(), Some(150));
        assert_eq!(ceiling(&header, &nodes, &codec, &100i64).unwrap(), Some(100));
        assert_eq!(floor(&header, &nodes, &codec, &100i64).unwrap(), Some(100));
        assert_eq!(higher(&header, &nodes, &codec, &200i64).unwrap(), None);
        assert_eq!(ceiling(&header, &nodes, &codec, &201i64).unwrap(), None);
        assert_eq!(floor(&header, &nodes, &codec, &49i64).unwrap(), None);
        assert_eq!(floor(&header, &nodes, &codec, &50i64).unwrap(), Some(50));
        assert_eq!(first(&header, &nodes, &codec).unwrap(), Some(50));
        assert_eq!(last(&header, &nodes, &codec).unwrap(), Some(200));
    }

    #[test]
    fn empty_set_neighbors_are_all_none() {
        let dir = tempdir().unwrap();
        let file = FileHandle::open(dir.path().join("t.bin")).unwrap();
        Header::init_if_empty(&file).unwrap();
        let header = Header::new(&file);
        let nodes = NodeAccessor::new(&file);
        let codec = FixedIntCodec::<i64>::new();

        assert_eq!(first::<i64, _>(&header, &nodes, &codec).unwrap(), None);
        assert_eq!(last::<i64, _>(&header, &nodes, &codec).unwrap(), None);
        assert_eq!(higher(&header, &nodes, &codec, &1i64).unwrap(), None);
        assert_eq!(ceiling(&header, &nodes, &codec, &1i64).unwrap(), None);
        assert_eq!(floor(&header, &nodes, &codec, &1i64).unwrap(), None);
    }
}
