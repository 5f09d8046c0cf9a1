//! LZW configuration and the code-space layout.
//!
//! The code space is partitioned as follows (shown for the default 12-bit
//! width):
//!
//! ```text
//! 0 ..= 255     literal bytes, always present
//! 256           EOF sentinel, never a phrase
//! 257 ..= 4095  learned phrases, assigned in increasing order
//! ```

use crate::error::{LzwError, Result};

/// Number of literal codes (one per byte value).
pub const ALPHABET_SIZE: u16 = 256;

/// End-of-stream sentinel code.
pub const EOF_CODE: u16 = ALPHABET_SIZE;

/// First code handed out to a learned phrase.
pub const FIRST_CODE: u16 = EOF_CODE + 1;

/// Codeword width of the OxiText wire format.
pub const DEFAULT_CODE_BITS: u8 = 12;

/// Smallest width that still leaves room for the literals and EOF.
pub const MIN_CODE_BITS: u8 = 9;

/// Largest width a `u16` code can carry.
pub const MAX_CODE_BITS: u8 = 16;

/// LZW configuration parameters.
///
/// Codewords have a fixed width for the whole run; the width only decides
/// how many phrases the dictionary can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Codeword width in bits.
    pub code_bits: u8,
}

impl LzwConfig {
    /// Standard OxiText configuration: 12-bit codewords, 4096 codes.
    pub const DEFAULT: Self = Self {
        code_bits: DEFAULT_CODE_BITS,
    };

    /// Create a configuration with a custom fixed codeword width.
    pub fn new(code_bits: u8) -> Result<Self> {
        if !(MIN_CODE_BITS..=MAX_CODE_BITS).contains(&code_bits) {
            return Err(LzwError::InvalidCodeWidth(code_bits));
        }
        Ok(Self { code_bits })
    }

    /// Get the EOF sentinel code.
    pub fn eof_code(&self) -> u16 {
        EOF_CODE
    }

    /// Get the first code available for learned phrases.
    pub fn first_code(&self) -> u16 {
        FIRST_CODE
    }

    /// Total number of codes (dictionary capacity including literals and EOF).
    pub fn capacity(&self) -> u32 {
        1u32 << self.code_bits
    }

    /// Largest codeword value.
    pub fn max_code(&self) -> u16 {
        (self.capacity() - 1) as u16
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
