//! Error types for font creation, selection and batching.

use std::path::PathBuf;
use thiserror::Error;

/// alias used by every fallible operation in the crate
pub type Result<T> = std::result::Result<T, TypeballError>;

#[derive(Debug, Error)]
pub enum TypeballError {
    #[error("font resource not found: {0:?}")]
    ResourceNotFound(PathBuf),

    #[error("malformed font description: {0}")]
    MalformedDescription(String),

    #[error("failed to decode font image: {0}")]
    ImageDecode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("a texture sink of this kind or an incompatible one is already registered")]
    DuplicateSinkRegistration,

    #[error("no render sink registered")]
    MissingRenderSink,

    #[error("no font selected")]
    NoFontSelected,

    #[error("unknown font: {0}")]
    UnknownFont(String),

    #[error("font selection is locked until the batch is flushed")]
    FontLocked,

    #[error("canvas size is not set")]
    NoCanvas,

    #[error("batch capacity of {capacity} characters exceeded")]
    CapacityExceeded { capacity: usize },
}

impl From<serde_json::Error> for TypeballError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedDescription(err.to_string())
    }
}
