//! Descends from the root following the total ordering, recording the path
//! of visited offsets for the balancer.

use crate::error::{EngineResult, codec_err};
use avl_node::{ABSENT, Header, NodeAccessor, PayloadCodec};
use std::cmp::Ordering;

/// Outcome of [`locate`]. The path stack always goes root-first,
/// insertion-site-last; it is consumed bottom-up by the balancer after an
/// insert.
#[derive(Debug)]
pub enum Locate {
    /// `value` is already stored at the offset on top of `path`.
    Present { path: Vec<i64> },
    /// `value` would become the left child of the offset on top of `path`.
    MissingLeft { path: Vec<i64> },
    /// `value` would become the right child of the offset on top of `path`.
    MissingRight { path: Vec<i64> },
    /// The set is empty; `path` holds only the root sentinel offset.
    EmptyRoot { path: Vec<i64> },
}

/// Walks from the root toward where `value` is, or would be, stored.
pub fn locate<T, C>(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    codec: &C,
    value: &T,
) -> EngineResult<Locate>
where
    T: Ord,
    C: PayloadCodec<T>,
{
    let root = header.root()?;

    if header.is_empty()? {
        return Ok(Locate::EmptyRoot { path: vec![root] });
    }

    let mut path = Vec::new();
    let mut current = root;

    loop {
        path.push(current);
        let payload = nodes.read_payload(current)?;
        let stored = codec.decode(&payload).map_err(codec_err("locate: decode"))?;

        match value.cmp(&stored) {
            Ordering::Less => {
                let left = nodes.left(current)?;
                if left == ABSENT {
                    return Ok(Locate::MissingLeft { path });
                }
                current = left;
            }
            Ordering::Greater => {
                let right = nodes.right(current)?;
                if right == ABSENT {
                    return Ok(Locate::MissingRight { path });
                }
                current = right;
            }
            Ordering::Equal => return Ok(Locate::Present { path }),
        }
    }
}
