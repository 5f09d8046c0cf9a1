//! Error types for OxiText bit-level I/O.
//!
//! Codec crates wrap [`OxiTextError`] in their own error enums so callers can
//! tell a truncated stream apart from a semantically invalid one.

use std::io;
use thiserror::Error;

/// The main error type for OxiText stream operations.
#[derive(Debug, Error)]
pub enum OxiTextError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended before the requested number of bits was available.
    #[error(
        "Unexpected end of stream at bit position {position}: \
         requested {requested} bits, {available} available"
    )]
    UnexpectedEof {
        /// Number of bits requested by the caller.
        requested: u8,
        /// Number of bits that were still available.
        available: u8,
        /// Bit position where the read was attempted.
        position: u64,
    },

    /// Bit width outside of the supported range.
    #[error("Invalid bit width: {0} (must be 1-32)")]
    InvalidBitWidth(u8),
}

impl OxiTextError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(requested: u8, available: u8, position: u64) -> Self {
        Self::UnexpectedEof {
            requested,
            available,
            position,
        }
    }

    /// Check if this error indicates a truncated stream.
    pub fn is_eof(&self) -> bool {
        match self {
            Self::UnexpectedEof { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            Self::InvalidBitWidth(_) => false,
        }
    }
}

/// Result type alias for OxiText stream operations.
pub type Result<T> = std::result::Result<T, OxiTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiTextError::unexpected_eof(12, 4, 96);
        assert_eq!(
            err.to_string(),
            "Unexpected end of stream at bit position 96: requested 12 bits, 4 available"
        );

        let err = OxiTextError::InvalidBitWidth(40);
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_is_eof() {
        assert!(OxiTextError::unexpected_eof(12, 0, 0).is_eof());
        assert!(OxiTextError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)).is_eof());
        assert!(!OxiTextError::InvalidBitWidth(0).is_eof());
        assert!(!OxiTextError::Io(io::Error::other("broken pipe")).is_eof());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: OxiTextError = io_err.into();
        assert!(matches!(err, OxiTextError::Io(_)));
    }
}
