//! Arena-backed trie implementation
//!
//! Keys are walked byte-for-byte, one node per byte. A node's offset is
//! set only when it terminates an inserted key; interior nodes stay
//! unset, so a lookup that stops at one is a miss.

use std::collections::HashMap;

/// A single trie node
#[derive(Debug, Default)]
struct TrieNode {
    /// Child arena indexes, keyed by the next key byte
    children: HashMap<u8, usize>,

    /// Offset of the most recent record whose key ends at this node
    offset: Option<u64>,
}

/// Trie index mapping string keys to log offsets
#[derive(Debug)]
pub struct Trie {
    /// Node arena; index 0 is the root
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Create an empty trie holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert `key` mapping to `offset`, overwriting any prior value
    ///
    /// Walks the key's bytes, creating nodes as needed, and sets the
    /// terminal node's offset. The empty key is legal and sets the
    /// root's own offset.
    pub fn insert(&mut self, key: &str, offset: u64) {
        let mut current = 0;
        for byte in key.bytes() {
            current = match self.nodes[current].children.get(&byte).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(byte, child);
                    child
                }
            };
        }
        self.nodes[current].offset = Some(offset);
    }

    /// Look up the offset stored under exactly `key`
    ///
    /// Returns `None` on a prefix miss or when the terminal node exists
    /// but was never the end of an inserted key.
    pub fn lookup(&self, key: &str) -> Option<u64> {
        let mut current = 0;
        for byte in key.bytes() {
            current = *self.nodes[current].children.get(&byte)?;
        }
        self.nodes[current].offset
    }

    /// Number of nodes in the arena, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
