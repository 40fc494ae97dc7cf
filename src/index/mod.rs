//! Prefix Index Module
//!
//! In-memory trie mapping string keys to log file offsets.
//!
//! ## Responsibilities
//! - Map a key to the offset of the most recent record written under it
//! - Last-write-wins on duplicate keys (no multi-value buckets)
//! - Exact-match lookup only (no prefix enumeration, no deletion)
//!
//! ## Data Structure Choice
//! Nodes live in an arena (`Vec`) and reference children by index, with
//! the root at index 0. This avoids per-node heap allocation and owner
//! chasing during teardown; the whole index drops in one free.

mod trie;

pub use trie::Trie;
