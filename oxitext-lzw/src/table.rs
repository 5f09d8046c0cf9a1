//! Decoder code table (code -> phrase).

use crate::config::{ALPHABET_SIZE, LzwConfig};

/// Code table for decoding.
///
/// Storage for every slot is reserved up front; slots are filled in code
/// order, so the slot index is the code.
#[derive(Debug)]
pub struct DecodeTable {
    /// Phrases, indexed by code.
    entries: Vec<Vec<u8>>,
    /// Total number of slots.
    capacity: usize,
}

impl DecodeTable {
    /// Create a table holding the 256 literals and the EOF placeholder.
    pub fn new(config: LzwConfig) -> Self {
        let capacity = config.capacity() as usize;
        let mut entries = Vec::with_capacity(capacity);
        entries.extend((0..ALPHABET_SIZE).map(|b| vec![b as u8]));
        // EOF slot: never emitted
        entries.push(Vec::new());

        Self { entries, capacity }
    }

    /// Get the phrase for `code`, if it has been assigned.
    pub fn get(&self, code: u16) -> Option<&[u8]> {
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// Append a phrase at the next free code.
    ///
    /// Returns the assigned code, or `None` if the table is full.
    pub fn push(&mut self, phrase: Vec<u8>) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        let code = self.entries.len() as u16;
        self.entries.push(phrase);
        Some(code)
    }

    /// Next code that `push` would assign.
    pub fn next_code(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Check if every slot is taken.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}
