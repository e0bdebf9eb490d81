//! Error types for the PRS codec.

use std::collections::TryReserveError;
use thiserror::Error;

/// Main error type for PRS codec operations
#[derive(Debug, Error)]
pub enum PrsError {
    /// The node list or an output buffer could not be allocated
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// The node stream produces more bytes than the declared output size
    #[error("Output overflow: node stream produces more than the declared {expected} bytes")]
    BufferOverflow {
        /// The caller-declared decompressed size
        expected: usize,
    },

    /// A node with out-of-range fields reached the serializer
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// The compressed stream ended without a terminator (strict mode)
    #[error("Compressed stream is not terminated")]
    MissingTerminator,

    /// Input bytes remain after the stream terminator (strict mode)
    #[error("{0} trailing bytes after the stream terminator")]
    TrailingData(usize),

    /// A copy references further back than the bytes produced so far (strict mode)
    #[error("Copy references {offset} bytes back but only {available} bytes have been produced")]
    InvalidBackReference {
        /// Backward distance the copy asked for
        offset: usize,
        /// Bytes of output available at that point
        available: usize,
    },

    /// The stream produced fewer bytes than the declared output size (strict mode)
    #[error("Declared output size is {expected} bytes but the stream produced {produced}")]
    SizeMismatch {
        /// The caller-declared decompressed size
        expected: usize,
        /// Bytes the node stream actually produced
        produced: usize,
    },
}

/// Result type alias for PRS codec operations
pub type Result<T> = std::result::Result<T, PrsError>;
