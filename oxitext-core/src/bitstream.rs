//! MSB-first bit-level I/O.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! fixed-width integers that are packed back to back without any alignment.
//!
//! # Bit Ordering
//!
//! Values are packed MSB-first (Most Significant Bit first): the first bit
//! of a value lands in the highest free bit of the current byte, and values
//! freely straddle byte boundaries. Only the very last byte of a stream is
//! padded, with zero bits, when the writer is finished.
//!
//! # Example
//!
//! ```
//! use oxitext_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! // Writing bits
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0x41, 12).unwrap();
//! writer.write_bits(0x100, 12).unwrap();
//! let output = writer.finish().unwrap();
//! assert_eq!(output, vec![0x04, 0x11, 0x00]);
//!
//! // Reading bits
//! let mut reader = BitReader::new(Cursor::new(output));
//! assert_eq!(reader.read_bits(12).unwrap(), 0x41);
//! assert_eq!(reader.read_bits(12).unwrap(), 0x100);
//! ```

use crate::error::{OxiTextError, Result};
use std::io::{self, Read, Write};

/// Largest number of bits a single read or write can carry.
pub const MAX_BITS: u8 = 32;

/// Widths outside `1..=MAX_BITS` are rejected.
#[inline]
fn check_width(count: u8) -> Result<()> {
    if count == 0 || count > MAX_BITS {
        return Err(OxiTextError::InvalidBitWidth(count));
    }
    Ok(())
}

#[inline]
fn low_mask(count: u8) -> u64 {
    (1u64 << count).wrapping_sub(1)
}

/// An MSB-first bit reader that wraps any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time, so wrap
/// unbuffered sources (files, stdin) in a `BufReader`.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; the valid bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Any bits still held in the internal buffer are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull one byte from the underlying reader, `None` at end of input.
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Ensure at least `count` bits are available in the buffer.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count {
            match self.next_byte()? {
                Some(byte) => {
                    self.buffer = (self.buffer << 8) | byte as u64;
                    self.bits_in_buffer += 8;
                }
                None => {
                    return Err(OxiTextError::unexpected_eof(
                        count,
                        self.bits_in_buffer,
                        self.total_bits_read,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Read between 1 and 32 bits from the stream, MSB-first.
    ///
    /// Fails with [`OxiTextError::UnexpectedEof`] if the stream holds fewer
    /// than `count` bits; no partial value is ever returned.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        check_width(count)?;
        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & low_mask(count);

        self.bits_in_buffer = shift;
        self.buffer &= low_mask(shift);
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read the entire remaining input as bytes.
    ///
    /// Partial bits left over from a previous `read_bits` call are discarded
    /// so the result starts at the next byte boundary.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let remainder = self.bits_in_buffer % 8;
        self.bits_in_buffer -= remainder;
        self.buffer &= low_mask(self.bits_in_buffer);
        self.total_bits_read += remainder as u64;

        let mut out = Vec::new();
        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            out.push((self.buffer >> self.bits_in_buffer) as u8);
            self.total_bits_read += 8;
        }
        self.buffer = 0;

        let n = self.reader.read_to_end(&mut out)?;
        self.total_bits_read += n as u64 * 8;
        Ok(out)
    }

    /// Check if no further whole byte can be read.
    ///
    /// Bits left over in a partially consumed final byte are treated as
    /// padding and do not count as data.
    pub fn is_eof(&mut self) -> Result<bool> {
        if self.bits_in_buffer >= 8 {
            return Ok(false);
        }
        match self.next_byte()? {
            None => Ok(true),
            Some(byte) => {
                self.buffer = (self.buffer << 8) | byte as u64;
                self.bits_in_buffer += 8;
                Ok(false)
            }
        }
    }

    /// Count the whole bytes left in the stream, consuming them.
    pub fn drain_bytes(&mut self) -> Result<u64> {
        Ok(self.read_to_end()?.len() as u64)
    }
}

/// An MSB-first bit writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits and hands complete bytes to the underlying
/// writer. Call [`BitWriter::finish`] when done: it pads the final partial
/// byte with zero bits and flushes. If the writer is dropped without being
/// finished (for example on an error path) the same padding and flush are
/// attempted on a best-effort basis.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer, taken by `finish`.
    writer: Option<W>,
    /// Bit buffer; the pending bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of bits in buffer (always < 8 between calls).
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far (excluding padding).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    fn sink(&mut self) -> Result<&mut W> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::other("bit writer already finished").into())
    }

    /// Move complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        let mut bytes = [0u8; 8];
        let mut n = 0;
        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            bytes[n] = (self.buffer >> self.bits_in_buffer) as u8;
            n += 1;
        }
        self.buffer &= low_mask(self.bits_in_buffer);

        if n > 0 {
            self.sink()?.write_all(&bytes[..n])?;
        }
        Ok(())
    }

    /// Write between 1 and 32 bits to the stream, MSB-first.
    ///
    /// Bits of `value` above `count` are ignored.
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        check_width(count)?;
        self.buffer = (self.buffer << count) | (value as u64 & low_mask(count));
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a byte sequence.
    ///
    /// When the stream is byte-aligned the bytes go straight to the writer,
    /// otherwise they are merged into the bit buffer.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        if self.bits_in_buffer == 0 {
            self.sink()?.write_all(buf)?;
            self.total_bits_written += buf.len() as u64 * 8;
        } else {
            for &byte in buf {
                self.write_bits(byte as u32, 8)?;
            }
        }
        Ok(())
    }

    /// Pad the final byte with zeros and flush the underlying writer.
    fn pad_and_flush(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            self.buffer <<= padding;
            self.bits_in_buffer += padding;
            self.flush_bytes()?;
        }
        self.sink()?.flush()?;
        Ok(())
    }

    /// Finish the stream and return the underlying writer.
    ///
    /// The final partial byte is padded with zero bits.
    pub fn finish(mut self) -> Result<W> {
        self.pad_and_flush()?;
        self.writer
            .take()
            .ok_or_else(|| io::Error::other("bit writer already finished").into())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        if self.writer.is_some() {
            // Best-effort flush on drop
            let _ = self.pad_and_flush();
        }
    }
}
