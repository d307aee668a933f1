//! Appends new nodes at the "next free" offset and advances it past the new
//! node's tail. Never reuses offsets, never compacts.

use crate::error::{EngineResult, codec_err};
use avl_node::{ABSENT, Header, NodeAccessor, PayloadCodec};

/// Allocates and fully writes a brand-new leaf node for `value`, returning
/// its offset.
pub fn allocate_node<T, C>(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    codec: &C,
    value: &T,
) -> EngineResult<i64>
where
    C: PayloadCodec<T>,
{
    let payload = codec.encode(value).map_err(codec_err("allocate: encode"))?;
    let at = header.next_free()?;

    let tail = nodes.write_new_node(at, ABSENT, ABSENT, 0, &payload)?;
    header.set_next_free(tail)?;

    tracing::trace!(offset = at, payload_len = payload.len(), "allocated node");

    Ok(at)
}
