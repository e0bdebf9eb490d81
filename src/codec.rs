//! Compressor and decompressor entry points for the PRS format.
//!
//! Both directions operate on whole in-memory buffers; there is no
//! streaming form. The wire format carries no length field, so the
//! decompressor must be told the exact decompressed size its caller
//! recorded out-of-band.

use crate::decoder::read_nodes;
use crate::encoder::{build_nodes, store_nodes};
use crate::error::Result;
use crate::expand::expand;
use crate::notification::NotificationCollection;

/// Trait for compressing a byte buffer.
pub trait Compressor {
    /// Compress `source`, returning the compressed byte stream.
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>>;
}

/// Trait for decompressing a byte buffer.
pub trait Decompressor {
    /// Decompress `source`, returning a buffer of `decompressed_size` bytes.
    fn decompress(&self, source: &[u8], decompressed_size: usize) -> Result<Vec<u8>>;
}

/// How the decoder treats malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Recover where possible and report through notifications.
    #[default]
    Lenient,
    /// Promote every recoverable condition to a hard error.
    Strict,
}

/// Compressor for PRS streams.
///
/// Stateless; every call builds its own node list and bit cursor, so one
/// instance may serve concurrent calls from multiple threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrsCompressor;

impl PrsCompressor {
    /// Create a new compressor.
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for PrsCompressor {
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>> {
        let nodes = build_nodes(source)?;
        store_nodes(&nodes)
    }
}

/// Decompressed bytes together with the diagnostics gathered on the way.
#[derive(Debug)]
pub struct Decompression {
    /// The reconstructed bytes, exactly the declared size.
    pub data: Vec<u8>,
    /// Diagnostics collected while decoding (empty for clean streams).
    pub notifications: NotificationCollection,
}

/// Decompressor for PRS streams.
///
/// Holds only the decode mode; every call owns its node list, bit cursor,
/// and notification collection, so one instance may serve concurrent calls
/// from multiple threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrsDecompressor {
    mode: DecodeMode,
}

impl PrsDecompressor {
    /// Lenient decompressor: recovers from malformed input and reports
    /// through notifications.
    pub fn new() -> Self {
        Self {
            mode: DecodeMode::Lenient,
        }
    }

    /// Strict decompressor: malformed input is a hard error.
    pub fn strict() -> Self {
        Self {
            mode: DecodeMode::Strict,
        }
    }

    /// The configured decode mode.
    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Decompress and hand back the diagnostics alongside the data.
    pub fn decompress_with_report(
        &self,
        source: &[u8],
        decompressed_size: usize,
    ) -> Result<Decompression> {
        let mut notifications = NotificationCollection::new();
        let nodes = read_nodes(source, self.mode, &mut notifications)?;
        let data = expand(&nodes, decompressed_size, self.mode, &mut notifications)?;
        Ok(Decompression {
            data,
            notifications,
        })
    }
}

impl Decompressor for PrsDecompressor {
    fn decompress(&self, source: &[u8], decompressed_size: usize) -> Result<Vec<u8>> {
        self.decompress_with_report(source, decompressed_size)
            .map(|d| d.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress() {
        let input = b"compress me, compress me again".to_vec();
        let compressed = PrsCompressor::new().compress(&input).unwrap();
        let decompressed = PrsDecompressor::new()
            .decompress(&compressed, input.len())
            .unwrap();
        assert_eq!(decompressed, input);
    }

    #[test]
    fn test_clean_stream_has_no_notifications() {
        let input = b"abcabcabcabc".to_vec();
        let compressed = PrsCompressor::new().compress(&input).unwrap();
        let report = PrsDecompressor::new()
            .decompress_with_report(&compressed, input.len())
            .unwrap();
        assert_eq!(report.data, input);
        assert!(report.notifications.is_empty());
    }

    #[test]
    fn test_strict_accepts_own_output() {
        let input = vec![9u8; 100];
        let compressed = PrsCompressor::new().compress(&input).unwrap();
        let decompressed = PrsDecompressor::strict()
            .decompress(&compressed, input.len())
            .unwrap();
        assert_eq!(decompressed, input);
    }

    #[test]
    fn test_default_mode_is_lenient() {
        assert_eq!(PrsDecompressor::default().mode(), DecodeMode::Lenient);
        assert_eq!(PrsDecompressor::strict().mode(), DecodeMode::Strict);
    }
}
