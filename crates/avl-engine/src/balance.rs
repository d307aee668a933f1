//! After each insertion, ascends the recorded path, recomputes heights, and
//! performs single or double rotations when the AVL balance invariant is
//! violated.

use crate::error::EngineResult;
use avl_node::{ABSENT, Header, NodeAccessor};

/// Pops offsets leaf-toward-root, rebalancing and updating heights along the
/// way. Ascent continues through the full path so every ancestor's height
/// is refreshed even when no rotation fires.
pub fn rebalance_path(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    mut path: Vec<i64>,
) -> EngineResult<()> {
    while let Some(n) = path.pop() {
        let parent = path.last().copied().unwrap_or(ABSENT);

        let height_left = nodes.height(nodes.left(n)?)?;
        let height_right = nodes.height(nodes.right(n)?)?;

        if (height_left - height_right).abs() <= 1 {
            nodes.set_height(n, 1 + height_left.max(height_right))?;
            continue;
        }

        if height_left > height_right {
            let left = nodes.left(n)?;
            let left_left = nodes.height(nodes.left(left)?)?;
            let left_right = nodes.height(nodes.right(left)?)?;

            if left_left >= left_right {
                tracing::debug!(node = n, "left-left case: single right rotation");
                rotate_right(header, nodes, n, parent)?;
            } else {
                tracing::debug!(node = n, "left-right case: double rotation");
                rotate_left(header, nodes, left, n)?;
                rotate_right(header, nodes, n, parent)?;
            }
        } else {
            let right = nodes.right(n)?;
            let right_right = nodes.height(nodes.right(right)?)?;
            let right_left = nodes.height(nodes.left(right)?)?;

            if right_right >= right_left {
                tracing::debug!(node = n, "right-right case: single left rotation");
                rotate_left(header, nodes, n, parent)?;
            } else {
                tracing::debug!(node = n, "right-left case: double rotation");
                rotate_right(header, nodes, right, n)?;
                rotate_left(header, nodes, n, parent)?;
            }
        }
    }

    Ok(())
}

/// Single left rotation about `axis`. `parent == ABSENT` means `axis` is the
/// current root, in which case the header's root field is rewritten instead
/// of a parent's child pointer.
fn rotate_left(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    axis: i64,
    parent: i64,
) -> EngineResult<i64> {
    let promoted = nodes.right(axis)?;
    let promoted_left = nodes.left(promoted)?;

    nodes.set_left(promoted, axis)?;
    nodes.set_right(axis, promoted_left)?;

    update_height(nodes, axis)?;
    update_height(nodes, promoted)?;

    attach(header, nodes, parent, axis, promoted)?;

    Ok(promoted)
}

/// Single right rotation about `axis`.
fn rotate_right(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    axis: i64,
    parent: i64,
) -> EngineResult<i64> {
    let promoted = nodes.left(axis)?;
    let promoted_right = nodes.right(promoted)?;

    nodes.set_right(promoted, axis)?;
    nodes.set_left(axis, promoted_right)?;

    update_height(nodes, axis)?;
    update_height(nodes, promoted)?;

    attach(header, nodes, parent, axis, promoted)?;

    Ok(promoted)
}

/// Rewires `parent`'s child pointer that used to point at `old_child` to
/// point at `new_child` instead, or updates the header's root field if
/// `parent` is absent (meaning `old_child` was the root).
fn attach(
    header: &Header<'_>,
    nodes: &NodeAccessor<'_>,
    parent: i64,
    old_child: i64,
    new_child: i64,
) -> EngineResult<()> {
    if parent == ABSENT {
        header.set_root(new_child)?;
        return Ok(());
    }

    if nodes.left(parent)? == old_child {
        nodes.set_left(parent, new_child)?;
    } else {
        nodes.set_right(parent, new_child)?;
    }

    Ok(())
}

fn update_height(nodes: &NodeAccessor<'_>, n: i64) -> EngineResult<()> {
    let height_left = nodes.height(nodes.left(n)?)?;
    let height_right = nodes.height(nodes.right(n)?)?;
    nodes.set_height(n, 1 + height_left.max(height_right))?;
    Ok(())
}
