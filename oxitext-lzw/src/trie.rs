//! Ternary search trie used as the encoder's phrase dictionary.
//!
//! Every node holds one byte and three links: `lo` and `hi` lead to siblings
//! with a smaller or larger byte at the same key position, `eq` descends one
//! position deeper into the key. A node carrying a code marks the end of a
//! stored key.
//!
//! Nodes live in a single arena (`Vec<Node>`) and refer to their children by
//! index. Links only ever point downwards, so there is no need for parent
//! pointers or reference counting.

use crate::config::ALPHABET_SIZE;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Null link.
const NIL: u32 = u32::MAX;

#[derive(Debug, Clone)]
struct Node {
    byte: u8,
    lo: u32,
    eq: u32,
    hi: u32,
    code: Option<u16>,
}

impl Node {
    fn new(byte: u8) -> Self {
        Self {
            byte,
            lo: NIL,
            eq: NIL,
            hi: NIL,
            code: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Link {
    Lo,
    Eq,
    Hi,
}

/// Byte-string to code map with longest-prefix search.
#[derive(Debug, Clone)]
pub struct TernaryTrie {
    nodes: Vec<Node>,
    root: u32,
    keys: usize,
}

impl TernaryTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NIL,
            keys: 0,
        }
    }

    /// Create a trie holding every single-byte key, each mapped to its own
    /// byte value.
    ///
    /// The literals are inserted median-first so the first key position forms
    /// a balanced tree of depth 8 instead of a 256-node chain.
    pub fn with_literals() -> Self {
        let mut trie = Self::new();
        let mut ranges = VecDeque::from([(0u16, ALPHABET_SIZE)]);
        while let Some((lo, hi)) = ranges.pop_front() {
            if lo >= hi {
                continue;
            }
            let mid = lo + (hi - lo) / 2;
            trie.insert(&[mid as u8], mid);
            ranges.push_back((lo, mid));
            ranges.push_back((mid + 1, hi));
        }
        trie
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.keys
    }

    /// Check if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Number of allocated nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn alloc(&mut self, byte: u8) -> u32 {
        self.nodes.push(Node::new(byte));
        (self.nodes.len() - 1) as u32
    }

    /// Follow `link` from `node`, creating a node for `byte` if it is missing.
    fn child_or_insert(&mut self, node: u32, link: Link, byte: u8) -> u32 {
        let n = &self.nodes[node as usize];
        let child = match link {
            Link::Lo => n.lo,
            Link::Eq => n.eq,
            Link::Hi => n.hi,
        };
        if child != NIL {
            return child;
        }

        let child = self.alloc(byte);
        let n = &mut self.nodes[node as usize];
        match link {
            Link::Lo => n.lo = child,
            Link::Eq => n.eq = child,
            Link::Hi => n.hi = child,
        }
        child
    }

    /// Insert `key` with the given code.
    ///
    /// Inserting an existing key replaces its code. Empty keys are ignored.
    pub fn insert(&mut self, key: &[u8], code: u16) {
        let Some(&first) = key.first() else {
            return;
        };
        if self.root == NIL {
            self.root = self.alloc(first);
        }

        let mut node = self.root;
        let mut pos = 0;
        loop {
            let byte = key[pos];
            match byte.cmp(&self.nodes[node as usize].byte) {
                Ordering::Less => node = self.child_or_insert(node, Link::Lo, byte),
                Ordering::Greater => node = self.child_or_insert(node, Link::Hi, byte),
                Ordering::Equal => {
                    pos += 1;
                    if pos == key.len() {
                        if self.nodes[node as usize].code.replace(code).is_none() {
                            self.keys += 1;
                        }
                        return;
                    }
                    node = self.child_or_insert(node, Link::Eq, key[pos]);
                }
            }
        }
    }

    /// Get the code stored for exactly `key`.
    pub fn lookup(&self, key: &[u8]) -> Option<u16> {
        if key.is_empty() {
            return None;
        }

        let mut node = self.root;
        let mut pos = 0;
        while node != NIL {
            let n = &self.nodes[node as usize];
            match key[pos].cmp(&n.byte) {
                Ordering::Less => node = n.lo,
                Ordering::Greater => node = n.hi,
                Ordering::Equal => {
                    pos += 1;
                    if pos == key.len() {
                        return n.code;
                    }
                    node = n.eq;
                }
            }
        }
        None
    }

    /// Find the longest stored key that is a prefix of `text[start..]`.
    ///
    /// Returns the matching slice of `text`, or an empty slice when no key
    /// matches or `start` is past the end. The walk stops as soon as the
    /// trie runs out of branches, so its cost depends on the match length
    /// and the branching at each position, not on the number of keys.
    pub fn longest_prefix<'t>(&self, text: &'t [u8], start: usize) -> &'t [u8] {
        if start >= text.len() {
            return &[];
        }

        let mut best = start;
        let mut node = self.root;
        let mut pos = start;
        while node != NIL && pos < text.len() {
            let n = &self.nodes[node as usize];
            match text[pos].cmp(&n.byte) {
                Ordering::Less => node = n.lo,
                Ordering::Greater => node = n.hi,
                Ordering::Equal => {
                    pos += 1;
                    if n.code.is_some() {
                        best = pos;
                    }
                    node = n.eq;
                }
            }
        }
        &text[start..best]
    }
}

impl Default for TernaryTrie {
    fn default() -> Self {
        Self::new()
    }
}
