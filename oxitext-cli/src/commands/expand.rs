//! Expand command implementation.

use oxitext_core::BitReader;
use oxitext_lzw::{LzwConfig, LzwDecoder};
use std::io::{Read, Write};
use std::time::Instant;
use tracing::info;

/// Read a packed codeword stream from `input` and write the reconstructed text.
///
/// Nothing is written unless the whole stream decodes, so a truncated or
/// corrupt stream never produces partial output.
pub fn cmd_expand<R: Read, W: Write>(
    config: LzwConfig,
    input: R,
    mut output: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let mut reader = BitReader::new(input);
    let (text, stats) = LzwDecoder::new(config).decode_from(&mut reader)?;

    // Plain bytes, already aligned
    output.write_all(&text)?;
    output.flush()?;

    info!(
        input_bytes = reader.bits_read().div_ceil(8),
        output_bytes = stats.output_len,
        codes = stats.codes_read,
        dictionary_size = stats.next_code,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "expanded"
    );
    Ok(())
}
