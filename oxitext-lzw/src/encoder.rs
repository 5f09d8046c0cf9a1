//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::error::{LzwError, Result};
use crate::trie::TernaryTrie;
use oxitext_core::BitWriter;
use std::io::Write;
use tracing::{debug, trace};

/// Summary of one encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeStats {
    /// Number of input bytes consumed.
    pub input_len: usize,
    /// Number of data codewords emitted (the EOF code is not counted).
    pub codes_emitted: usize,
    /// Next free code when the run ended.
    pub next_code: u32,
}

/// LZW encoder for compression.
///
/// The encoder only carries its configuration. Each call builds a fresh
/// dictionary, so one encoder can be reused, or shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Run the LZW algorithm over `input`, handing each codeword to `emit`.
    ///
    /// # Algorithm
    ///
    /// 1. Seed the dictionary with the 256 single-byte phrases
    /// 2. Find the longest dictionary phrase at the cursor
    /// 3. Emit its code
    /// 4. Unless the input is exhausted or the dictionary is full, learn
    ///    the phrase extended by the byte that follows it
    /// 5. Advance the cursor past the phrase and repeat
    /// 6. Emit the EOF code
    fn encode_with<F>(&self, input: &[u8], mut emit: F) -> Result<EncodeStats>
    where
        F: FnMut(u16) -> Result<()>,
    {
        let mut dict = TernaryTrie::with_literals();
        let capacity = self.config.capacity();
        let mut next_code = self.config.first_code() as u32;
        let mut codes_emitted = 0;
        let mut cursor = 0;

        while cursor < input.len() {
            let prefix = dict.longest_prefix(input, cursor);
            let code = dict
                .lookup(prefix)
                .ok_or(LzwError::MissingPhrase { offset: cursor })?;
            emit(code)?;
            codes_emitted += 1;

            let end = cursor + prefix.len();
            if end < input.len() && next_code < capacity {
                dict.insert(&input[cursor..=end], next_code as u16);
                next_code += 1;
                if next_code == capacity {
                    trace!(offset = end, "dictionary full, no further phrases");
                }
            }
            cursor = end;
        }

        emit(self.config.eof_code())?;

        Ok(EncodeStats {
            input_len: input.len(),
            codes_emitted,
            next_code,
        })
    }

    /// Encode `input` into a bit writer.
    ///
    /// The writer is left open; call [`BitWriter::finish`] afterwards.
    pub fn encode_to<W: Write>(
        &self,
        input: &[u8],
        writer: &mut BitWriter<W>,
    ) -> Result<EncodeStats> {
        let bits = self.config.code_bits;
        let stats = self.encode_with(input, |code| {
            writer.write_bits(code as u32, bits)?;
            Ok(())
        })?;

        debug!(
            input_bytes = stats.input_len,
            codes = stats.codes_emitted,
            dictionary_size = stats.next_code,
            output_bits = writer.bits_written(),
            "lzw encode finished"
        );
        Ok(stats)
    }

    /// Encode data with LZW compression.
    ///
    /// # Returns
    ///
    /// The packed codeword stream, terminated by the EOF code and padded
    /// to a whole byte.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let bits = self.config.code_bits as usize;
        // Rough guess: one codeword per two input bytes
        let estimate = (input.len() / 2 + 1) * bits / 8 + 2;
        let mut writer = BitWriter::new(Vec::with_capacity(estimate));
        self.encode_to(input, &mut writer)?;
        Ok(writer.finish()?)
    }

    /// Encode `input` and return the raw codeword sequence, EOF included.
    pub fn encode_codes(&self, input: &[u8]) -> Result<(Vec<u16>, EncodeStats)> {
        let mut codes = Vec::new();
        let stats = self.encode_with(input, |code| {
            codes.push(code);
            Ok(())
        })?;
        Ok((codes, stats))
    }
}
