//! # avlset
//!
//! A persistent, disk-resident ordered set. All state — tree topology,
//! payloads, metadata — lives in a single append-growing file; no
//! significant portion of the tree is mirrored in memory. It targets
//! workloads that insert very large numbers of comparable items and later
//! test membership or perform ordered neighbor queries, where an in-memory
//! ordered set would not fit.
//!
//! The crate is organized the way the underlying engine is layered:
//!
//! - `binary-helpers`: fixed-width little-endian integer codec.
//! - `storage-file`: byte-addressed random-access file handle.
//! - `avl-node`: header manager, node accessor, payload codec.
//! - `avl-engine`: bump allocator, search walker, AVL balancer, ordered
//!   query surface, in-order iterator — re-exported here as the public API.
//!
//! Deletion, cross-process concurrency, crash journaling, in-place payload
//! update, and secondary indexes are explicitly out of scope; see the
//! removal-family methods on [`Engine`], which always return
//! [`EngineError::Unsupported`].

pub use avl_engine::{
    Engine, EngineError, EngineOptions, EngineResult, FixedIntCodec, OrderedIter, PayloadCodec,
    Utf8Codec,
};
