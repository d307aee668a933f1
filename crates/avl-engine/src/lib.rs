//! The on-disk self-balancing ordered set engine.
//!
//! Layers, leaves first: a bump [`allocator`] appends nodes to the file; a
//! [`walker`] descends the tree following the total ordering and records
//! the path it took; a [`balance`]r ascends that path after every insert,
//! recomputing heights and rotating where the AVL invariant is violated;
//! [`queries`] implements the ordered neighbor operations on top of the
//! same node accessor. [`Engine`] ties all of it together behind a single
//! coarse-grained lock and is the type callers actually hold.

mod allocator;
mod balance;
pub mod error;
pub mod iter;
mod queries;
mod walker;

mod engine;

pub use avl_node::{FixedIntCodec, PayloadCodec, Utf8Codec};
pub use engine::{Engine, EngineOptions};
pub use error::{EngineError, EngineResult};
pub use iter::OrderedIter;
