//! A minimal byte-addressed random-access file abstraction.
//!
//! This is the leaf component of the engine: everything above it (header,
//! node, allocator, search, balancing) is expressed purely in terms of
//! absolute byte offsets into a [`FileHandle`], never in terms of in-memory
//! objects.

pub mod handle;

pub use handle::FileHandle;
