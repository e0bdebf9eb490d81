//! # prs-tools-rs
//!
//! A pure Rust library for compressing and decompressing PRS byte streams.
//!
//! PRS is an LZ77-family format: a bit-packed control stream tags each
//! element as a literal byte, a short backward copy (up to 5 bytes from the
//! last 256), or a long backward copy (up to 256 bytes from the last 8192),
//! terminated by a reserved long-copy pattern. The format carries no header
//! and no length field, so callers must record the decompressed size
//! out-of-band (typically in their own container format).
//!
//! ## Quick Start
//!
//! ```rust
//! use prstools::{compress, decompress};
//!
//! let data = b"banana banana banana".to_vec();
//! let packed = compress(&data)?;
//! let unpacked = decompress(&packed, data.len())?;
//! assert_eq!(unpacked, data);
//! # Ok::<(), prstools::PrsError>(())
//! ```
//!
//! ## Architecture
//!
//! Both directions share one intermediate representation, a sequence of
//! [`Node`] values:
//!
//! - [`match_finder`] - backward window scans for repeatable runs
//! - [`encoder`] - greedy node building and bit-packed serialization
//! - [`decoder`] - bit-level parsing back into nodes
//! - [`expand`] - overlapping byte-at-a-time reconstruction
//! - [`codec`] - the [`Compressor`]/[`Decompressor`] entry points
//!
//! ## Malformed input
//!
//! Decoding is lenient by default: a missing terminator or trailing bytes
//! degrade to best-effort output with diagnostics collected in a
//! [`NotificationCollection`]. [`PrsDecompressor::strict`] promotes those
//! conditions to hard errors. A caller-declared output size that is too
//! small for the stream is always an error.

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod expand;
pub mod match_finder;
pub mod node;
pub mod notification;

// Re-export commonly used types
pub use codec::{
    Compressor, DecodeMode, Decompression, Decompressor, PrsCompressor, PrsDecompressor,
};
pub use error::{PrsError, Result};
pub use node::Node;
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compress `input` into a PRS byte stream.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    PrsCompressor::new().compress(input)
}

/// Decompress a PRS byte stream into exactly `expected_len` bytes.
///
/// Lenient: malformed input degrades to best-effort output. Use
/// [`PrsDecompressor`] to opt into strict mode or to inspect diagnostics.
pub fn decompress(input: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    PrsDecompressor::new().decompress(input, expected_len)
}
