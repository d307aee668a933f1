//! Header manager, node accessor, and payload codec: the fixed-layout
//! building blocks the AVL engine walks and mutates through file offsets.

pub mod codec;
pub mod error;
pub mod header;
pub mod node;

pub use codec::{FixedIntCodec, PayloadCodec, Utf8Codec};
pub use error::StoreError;
pub use header::{FIRST_NODE_OFFSET, HEADER_SIZE, Header};
pub use node::{ABSENT, ABSENT_HEIGHT, NODE_HEADER_SIZE, NodeAccessor};
