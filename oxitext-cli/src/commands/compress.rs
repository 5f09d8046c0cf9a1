//! Compress command implementation.

use oxitext_core::{BitReader, BitWriter};
use oxitext_lzw::{LzwConfig, LzwEncoder};
use std::io::{Read, Write};
use std::time::Instant;
use tracing::info;

/// Read all of `input` as raw text and write the packed codeword stream.
pub fn cmd_compress<R: Read, W: Write>(
    config: LzwConfig,
    input: R,
    output: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let text = BitReader::new(input).read_to_end()?;

    // Dropping the writer on an error path still pads and flushes
    let mut writer = BitWriter::new(output);
    let stats = LzwEncoder::new(config).encode_to(&text, &mut writer)?;
    let written = writer.bits_written().div_ceil(8);
    writer.finish()?;

    let ratio = if text.is_empty() {
        0.0
    } else {
        written as f64 / text.len() as f64 * 100.0
    };
    info!(
        input_bytes = text.len(),
        output_bytes = written,
        codes = stats.codes_emitted,
        dictionary_size = stats.next_code,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "compressed to {ratio:.2}% of original"
    );
    Ok(())
}
