//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary from the codeword stream
//! alone. It learns one phrase per codeword after the first, which keeps it
//! exactly one entry behind the encoder. That lag is why a codeword may name
//! the very phrase the decoder is about to learn; that phrase is always the
//! previous phrase followed by its own first byte.

use crate::config::LzwConfig;
use crate::error::{LzwError, Result};
use crate::table::DecodeTable;
use oxitext_core::BitReader;
use std::io::Read;
use tracing::{debug, trace};

/// Summary of one decoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeStats {
    /// Number of data codewords read (the EOF code is not counted).
    pub codes_read: usize,
    /// Number of bytes produced.
    pub output_len: usize,
    /// Next free code when the run ended.
    pub next_code: u32,
}

/// LZW decoder for decompression.
///
/// Like [`LzwEncoder`](crate::LzwEncoder), the decoder only carries its
/// configuration; every call starts from a fresh code table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwDecoder {
    config: LzwConfig,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Decode codewords pulled from `next` until the EOF code.
    ///
    /// Output is only handed back once the EOF code has been seen; a failing
    /// `next` aborts the whole run.
    fn decode_with<F>(&self, mut next: F) -> Result<(Vec<u8>, DecodeStats)>
    where
        F: FnMut() -> Result<u16>,
    {
        let mut table = DecodeTable::new(self.config);
        let eof = self.config.eof_code();
        let mut output = Vec::new();
        let mut codes_read = 0;

        let first = next()?;
        if first == eof {
            return Ok((
                output,
                DecodeStats {
                    codes_read,
                    output_len: 0,
                    next_code: table.next_code(),
                },
            ));
        }

        let mut previous = table
            .get(first)
            .ok_or(LzwError::InvalidCode {
                code: first,
                next_code: table.next_code(),
            })?
            .to_vec();
        output.extend_from_slice(&previous);
        codes_read += 1;

        loop {
            let code = next()?;
            if code == eof {
                break;
            }
            codes_read += 1;

            let next_code = table.next_code();
            let entry = match table.get(code) {
                Some(phrase) => phrase.to_vec(),
                None if code as u32 == next_code => {
                    // Deferred entry: the phrase being defined right now
                    let mut phrase = previous.clone();
                    phrase.push(previous[0]);
                    phrase
                }
                None => return Err(LzwError::InvalidCode { code, next_code }),
            };

            output.extend_from_slice(&entry);

            if !table.is_full() {
                let mut phrase = previous;
                phrase.push(entry[0]);
                table.push(phrase);
                if table.is_full() {
                    trace!(codes = codes_read, "code table full");
                }
            }

            previous = entry;
        }

        let stats = DecodeStats {
            codes_read,
            output_len: output.len(),
            next_code: table.next_code(),
        };
        Ok((output, stats))
    }

    /// Decode a codeword stream from a bit reader.
    ///
    /// Anything but zero padding after the EOF code is rejected.
    pub fn decode_from<R: Read>(
        &self,
        reader: &mut BitReader<R>,
    ) -> Result<(Vec<u8>, DecodeStats)> {
        let bits = self.config.code_bits;
        let (output, stats) =
            self.decode_with(|| Ok(reader.read_bits(bits)? as u16))?;

        if !reader.is_eof()? {
            return Err(LzwError::TrailingData {
                bytes: reader.drain_bytes()?,
            });
        }

        debug!(
            input_bits = reader.bits_read(),
            codes = stats.codes_read,
            output_bytes = stats.output_len,
            dictionary_size = stats.next_code,
            "lzw decode finished"
        );
        Ok((output, stats))
    }

    /// Decode LZW-compressed data.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut reader = BitReader::new(input);
        let (output, _) = self.decode_from(&mut reader)?;
        Ok(output)
    }

    /// Decode a raw codeword sequence, which must end with the EOF code.
    pub fn decode_codes(&self, codes: &[u16]) -> Result<(Vec<u8>, DecodeStats)> {
        let bits = self.config.code_bits;
        let mut iter = codes.iter().copied();
        let mut position = 0u64;
        self.decode_with(|| {
            let code = iter.next().ok_or_else(|| {
                oxitext_core::OxiTextError::unexpected_eof(bits, 0, position)
            })?;
            position += bits as u64;
            Ok(code)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;

    #[test]
    fn test_decode_empty_stream() {
        let decoder = LzwDecoder::default();
        let (output, stats) = decoder.decode_codes(&[256]).unwrap();
        assert!(output.is_empty());
        assert_eq!(stats.codes_read, 0);

        assert_eq!(decoder.decode(&[0x10, 0x00]).unwrap(), b"");
    }

    #[test]
    fn test_decode_deferred_entry() {
        let decoder = LzwDecoder::default();
        // 257 is read while the table's next free slot is 257
        let (output, stats) = decoder.decode_codes(&[65, 257, 65, 256]).unwrap();
        assert_eq!(output, b"AAAA");
        assert_eq!(stats.codes_read, 3);
        assert_eq!(stats.next_code, 259);
    }

    #[test]
    fn test_decode_classic_sequence() {
        let decoder = LzwDecoder::default();
        let (output, _) = decoder.decode_codes(&[65, 66, 257, 259, 256]).unwrap();
        assert_eq!(output, b"ABABABA");
    }

    #[test]
    fn test_decode_rejects_code_past_next() {
        let decoder = LzwDecoder::default();
        let err = decoder.decode_codes(&[65, 258, 256]).unwrap_err();
        assert!(matches!(
            err,
            LzwError::InvalidCode {
                code: 258,
                next_code: 257
            }
        ));
    }

    #[test]
    fn test_decode_rejects_phrase_as_first_code() {
        let decoder = LzwDecoder::default();
        let err = decoder.decode_codes(&[257, 256]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidCode { code: 257, .. }));
    }

    #[test]
    fn test_decode_missing_eof() {
        let decoder = LzwDecoder::default();
        let err = decoder.decode_codes(&[65, 66]).unwrap_err();
        assert!(err.is_truncated());

        let err = decoder.decode(&[]).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn test_decode_truncated_stream() {
        let encoder = LzwEncoder::default();
        let decoder = LzwDecoder::default();

        let compressed = encoder.encode(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
        let err = decoder
            .decode(&compressed[..compressed.len() - 2])
            .unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn test_decode_trailing_data() {
        let decoder = LzwDecoder::default();
        let mut compressed = LzwEncoder::default().encode(b"A").unwrap();
        compressed.push(0);
        assert!(matches!(
            decoder.decode(&compressed),
            Err(LzwError::TrailingData { bytes: 1 })
        ));

        // Every whole byte past the padded EOF code is counted
        compressed.extend_from_slice(b"xy");
        assert!(matches!(
            decoder.decode(&compressed),
            Err(LzwError::TrailingData { bytes: 3 })
        ));
    }

    #[test]
    fn test_decode_from_leaves_padding_alone() {
        // "AB" is three codes: 36 bits, so the last byte carries 4 padding bits
        let compressed = LzwEncoder::default().encode(b"AB").unwrap();
        assert_eq!(compressed.len(), 5);

        let mut reader = BitReader::new(&compressed[..]);
        let (output, stats) = LzwDecoder::default().decode_from(&mut reader).unwrap();
        assert_eq!(output, b"AB");
        assert_eq!(stats.codes_read, 2);
        assert_eq!(reader.bits_read(), 36);
        assert!(reader.is_eof().unwrap());
    }

    #[test]
    fn test_decode_roundtrip() {
        let decoder = LzwDecoder::default();
        let original = b"This is a test of compression! ".repeat(10);
        let compressed = LzwEncoder::default().encode(&original).unwrap();
        assert_eq!(decoder.decode(&compressed).unwrap(), original);
    }
}
