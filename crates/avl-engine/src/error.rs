use avl_node::StoreError;
use std::error::Error as StdError;
use thiserror::Error;

/// Errors surfaced by the public engine API.
///
/// Every operation that touches the file or a caller-supplied codec can fail
/// with [`EngineError::Io`] or [`EngineError::Codec`]; neither is ever
/// conflated with a legitimate `false`/`None` result (see the design note on
/// `add`'s return value in the crate root docs).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The underlying file read, write, or seek failed.
    #[error("I/O failure during {op}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// The payload codec failed to encode or decode a value.
    #[error("codec failure during {op}")]
    Codec {
        op: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// `first`/`last` was called on an empty set.
    #[error("no such element")]
    NoSuchElement,
    /// The removal/bulk-extraction family is not implemented by this engine.
    #[error("unsupported operation: {op}")]
    Unsupported { op: &'static str },
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(source) => EngineError::Io {
                op: "node/header access",
                source,
            },
            StoreError::Binary(source) => EngineError::Io {
                op: "node/header access",
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
            },
            StoreError::DereferencedAbsent => EngineError::Io {
                op: "node/header access",
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "dereferenced the absent-child sentinel",
                ),
            },
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(source: std::io::Error) -> Self {
        EngineError::Io {
            op: "file access",
            source,
        }
    }
}

/// Wraps a codec error with the operation name under which it occurred.
pub(crate) fn codec_err<E>(op: &'static str) -> impl FnOnce(E) -> EngineError
where
    E: StdError + Send + Sync + 'static,
{
    move |source| EngineError::Codec {
        op,
        source: Box::new(source),
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
