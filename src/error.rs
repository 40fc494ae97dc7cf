//! Error types for dialdex
//!
//! Provides a unified error type for all operations.
//!
//! Lookup misses are NOT errors: `search_by_phone` and `search_by_name`
//! return `Ok(None)` when no record is indexed under the key.

use thiserror::Error;

/// Result type alias using DexError
pub type Result<T> = std::result::Result<T, DexError>;

/// Unified error type for dialdex operations
#[derive(Debug, Error)]
pub enum DexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Log Errors
    // -------------------------------------------------------------------------
    /// The log file contents contradict the length-prefixed record format:
    /// a negative length prefix, a payload extending past end-of-file, or an
    /// offset that does not point at a record.
    #[error("corrupt record at offset {offset}: {reason}")]
    CorruptRecord { offset: u64, reason: String },

    /// Payload exceeds the 32-bit signed range of the length prefix.
    #[error("record too large: {0} bytes")]
    RecordTooLarge(usize),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("decode error: {0}")]
    Decode(String),

    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    /// Operation attempted after `ContactStore::close`.
    #[error("store is closed")]
    Closed,
}
