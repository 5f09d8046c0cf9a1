//! LZW-specific error types.

use oxitext_core::OxiTextError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A codeword that is neither in the table nor the next code to be assigned.
    #[error("Invalid LZW code {code} (next assignable code is {next_code})")]
    InvalidCode {
        /// The offending codeword.
        code: u16,
        /// The decoder's next free code when the codeword was read.
        next_code: u32,
    },

    /// Invalid codeword width specified.
    #[error("Invalid code width: {0} (must be 9-16)")]
    InvalidCodeWidth(u8),

    /// The dictionary returned a prefix it has no code for.
    #[error("Dictionary has no code for the phrase at input offset {offset}")]
    MissingPhrase {
        /// Input offset of the phrase.
        offset: usize,
    },

    /// Whole bytes follow the EOF codeword.
    #[error("{bytes} trailing byte(s) after EOF code")]
    TrailingData {
        /// Number of unexpected bytes.
        bytes: u64,
    },

    /// Bit stream error (truncated input, I/O failure).
    #[error(transparent)]
    Stream(#[from] OxiTextError),
}

impl From<std::io::Error> for LzwError {
    fn from(err: std::io::Error) -> Self {
        Self::Stream(err.into())
    }
}

impl LzwError {
    /// Check if the error means the compressed stream was cut short.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Stream(e) if e.is_eof())
    }
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
