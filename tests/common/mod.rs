//! Shared scaffolding for the scenario/property tests: a way to open a raw,
//! read-only view of the same file an [`avlset::Engine`] is writing to and
//! check the invariants from spec.md §8 directly against file bytes, rather
//! than only through the public API.

#![allow(dead_code)]

use avl_node::{ABSENT, FIRST_NODE_OFFSET, Header, NODE_HEADER_SIZE, NodeAccessor};
use std::collections::HashSet;
use std::path::Path;
use storage_file::FileHandle;

/// A point-in-time view of the on-disk tree, built by walking the file
/// directly through [`avl_node`]'s public header/node accessors.
pub struct Snapshot {
    pub count: i64,
    /// Values in in-order traversal order (strictly increasing iff order
    /// invariant holds).
    pub inorder: Vec<i64>,
    /// Offsets reachable from the root.
    pub reachable: HashSet<i64>,
    /// Offsets in allocation order: the prefix `{24, 24+size1, 24+size1+size2, ...}`.
    pub allocated: Vec<i64>,
}

/// Opens a second, independent [`FileHandle`] onto `path` and walks the tree
/// to build a [`Snapshot`]. Safe to call while an `Engine` on the same path
/// is idle (between operations): every write goes through positioned
/// syscalls with no userspace buffering, so a fresh handle always sees the
/// latest bytes.
pub fn snapshot_i64(path: &Path) -> Snapshot {
    let file = FileHandle::open(path).expect("open raw view");
    let header = Header::new(&file);
    let nodes = NodeAccessor::new(&file);

    let count = header.count().expect("read count");
    let root = header.root().expect("read root");
    let next_free = header.next_free().expect("read next_free");

    let mut inorder = Vec::new();
    let mut reachable = HashSet::new();
    if !header.is_empty().expect("read is_empty") {
        walk(&nodes, root, &mut inorder, &mut reachable);
    }

    let mut allocated = Vec::new();
    let mut cursor = FIRST_NODE_OFFSET;
    while cursor < next_free {
        allocated.push(cursor);
        let len = nodes.payload_len(cursor).expect("read payload_len") as i64;
        cursor += NODE_HEADER_SIZE as i64 + len;
    }

    Snapshot {
        count,
        inorder,
        reachable,
        allocated,
    }
}

/// Recursively checks the AVL balance invariant at every node and collects
/// the in-order sequence plus the reachable-offset set. Panics (rather than
/// returning a `Result`) on an invariant violation, since these are test
/// assertions, not runtime errors the engine itself would surface.
fn walk(nodes: &NodeAccessor<'_>, at: i64, inorder: &mut Vec<i64>, reachable: &mut HashSet<i64>) {
    if at == ABSENT {
        return;
    }

    assert!(
        reachable.insert(at),
        "offset {at} reachable via more than one path — topology is not a tree"
    );

    let left = nodes.left(at).expect("read left");
    let right = nodes.right(at).expect("read right");

    walk(nodes, left, inorder, reachable);

    let payload = nodes.read_payload(at).expect("read payload");
    let value = i64::from_le_bytes(payload.try_into().expect("8-byte i64 payload"));
    inorder.push(value);

    walk(nodes, right, inorder, reachable);

    let height_left = nodes.height(left).expect("read left height");
    let height_right = nodes.height(right).expect("read right height");
    let stored_height = nodes.height(at).expect("read own height");

    assert!(
        (height_left - height_right).abs() <= 1,
        "balance invariant violated at offset {at}: hL={height_left} hR={height_right}"
    );
    assert_eq!(
        stored_height,
        1 + height_left.max(height_right),
        "stored height at offset {at} does not match 1 + max(hL, hR)"
    );
}

impl Snapshot {
    /// Asserts every invariant from spec.md §8.1–§8.5 at once.
    pub fn assert_all_invariants(&self) {
        assert!(
            self.inorder.windows(2).all(|w| w[0] < w[1]),
            "in-order traversal is not strictly increasing: {:?}",
            self.inorder
        );
        assert_eq!(
            self.count as usize,
            self.reachable.len(),
            "header count does not match the number of reachable nodes"
        );
        let allocated_set: HashSet<i64> = self.allocated.iter().copied().collect();
        assert_eq!(
            self.reachable, allocated_set,
            "reachable-from-root set differs from the allocation-order prefix"
        );
    }
}
