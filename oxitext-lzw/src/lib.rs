//! # OxiText-LZW: Pure Rust LZW Text Compression
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! with fixed-width codewords and a ternary-search-trie dictionary.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Fixed-width codes**: 12-bit codewords packed MSB-first
//! - **Trie dictionary**: longest-match lookup costs O(match length)
//! - **Stateless**: every call starts from a fresh dictionary
//!
//! ## Stream Format
//!
//! - **MSB-first bit order**: codewords straddle byte boundaries freely
//! - **12-bit codes**: no width growth, no clear codes
//! - **Code space**: `0-255` literals, `256` EOF, `257-4095` learned phrases
//! - **EOF termination**: exactly one EOF code, then zero padding to a byte
//! - **Frozen dictionary**: once all 4096 codes are taken, both sides keep
//!   matching against the existing phrases
//!
//! ## Example
//!
//! ```rust
//! use oxitext_lzw::{compress, expand};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! // Compress
//! let compressed = compress(original).unwrap();
//!
//! // Expand
//! let expanded = expand(&compressed).unwrap();
//!
//! assert_eq!(expanded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod encoder;
mod error;
mod table;
mod trie;

pub use config::{
    ALPHABET_SIZE, DEFAULT_CODE_BITS, EOF_CODE, FIRST_CODE, LzwConfig, MAX_CODE_BITS,
    MIN_CODE_BITS,
};
pub use decoder::{DecodeStats, LzwDecoder};
pub use encoder::{EncodeStats, LzwEncoder};
pub use error::{LzwError, Result};
pub use table::DecodeTable;
pub use trie::TernaryTrie;

/// Compress data with the default 12-bit configuration.
///
/// # Example
///
/// ```rust
/// use oxitext_lzw::compress;
///
/// // Empty input is a lone EOF code
/// assert_eq!(compress(b"").unwrap(), vec![0x10, 0x00]);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(data, LzwConfig::DEFAULT)
}

/// Expand data produced by [`compress`].
///
/// # Example
///
/// ```rust
/// use oxitext_lzw::{compress, expand};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original).unwrap();
/// assert_eq!(expand(&compressed).unwrap(), original);
/// ```
pub fn expand(data: &[u8]) -> Result<Vec<u8>> {
    expand_with(data, LzwConfig::DEFAULT)
}

/// Compress data with LZW using the given configuration.
///
/// # Example
///
/// ```rust
/// use oxitext_lzw::{compress_with, expand_with, LzwConfig};
///
/// let config = LzwConfig::new(16).unwrap();
/// let data = b"abracadabra abracadabra";
/// let compressed = compress_with(data, config).unwrap();
/// assert_eq!(expand_with(&compressed, config).unwrap(), data);
/// ```
pub fn compress_with(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwEncoder::new(config).encode(data)
}

/// Expand LZW data using the given configuration.
///
/// The configuration must match the one used for compression.
pub fn expand_with(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwDecoder::new(config).decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original).unwrap();
        assert_eq!(expand(&compressed).unwrap(), original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"").unwrap();
        assert_eq!(compressed.len(), 2);
        assert_eq!(expand(&compressed).unwrap(), b"");
    }

    #[test]
    fn test_single_byte() {
        let compressed = compress(b"A").unwrap();
        assert_eq!(expand(&compressed).unwrap(), b"A");
    }

    #[test]
    fn test_all_byte_values() {
        let original: Vec<u8> = (0..=255).collect();
        let compressed = compress(&original).unwrap();
        assert_eq!(expand(&compressed).unwrap(), original);
    }

    #[test]
    fn test_mismatched_width_is_detected() {
        let compressed = compress(b"abcabcabcabc").unwrap();
        let config = LzwConfig::new(16).unwrap();
        assert!(expand_with(&compressed, config).is_err());
    }
}
