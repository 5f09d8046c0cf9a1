//! # OxiText Core
//!
//! Core components for the OxiText text compressor.
//!
//! This crate provides the building blocks the codec crates sit on:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for fixed-width codewords
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     oxitext - / oxitext +  (stdin -> stdout)            │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LZW with ternary-search-trie dictionary             │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter                                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxitext_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0xABC, 12).unwrap();
//! let data = writer.finish().unwrap();
//!
//! let mut reader = BitReader::new(Cursor::new(data));
//! assert_eq!(reader.read_bits(12).unwrap(), 0xABC);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{OxiTextError, Result};
