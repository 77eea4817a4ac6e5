//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Read, step or removal attempted on a ring with no elements.
    #[error("the ring is empty")]
    EmptyRing,
    /// Invalid constructor or conversion input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Indexed access outside `[0, length)`.
    #[error("index {index} is out of range for ring of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    /// Fatal format failure while ingesting textual tokens.
    #[error("invalid format for token '{token}'")]
    Conversion { token: String },
}

/// Classification of a single token conversion failure.
///
/// The ingestion loop treats `Format` as fatal and every other kind as a
/// soft skip, so implementors of [`FromToken`](crate::ingest::FromToken)
/// choose the severity of their failures through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token text does not match the element type's expected format.
    #[error("malformed token")]
    Format,
    /// Token carries no value at all.
    #[error("empty token")]
    Empty,
    /// The element type cannot be produced from this token.
    #[error("unsupported conversion: {0}")]
    Unsupported(String),
}
