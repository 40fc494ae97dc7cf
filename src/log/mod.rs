//! Append Log Module
//!
//! A single growable binary file holding contact records in write order.
//!
//! ## Responsibilities
//! - Append length-prefixed payloads at the write cursor
//! - Random-access reads by byte offset, on independent handles
//! - Sequential record iteration for index rebuild
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Record 1                                │
//! │ ┌─────────────┬───────────────────────┐ │
//! │ │ Len (4, LE) │ Payload (Len bytes)   │ │
//! │ └─────────────┴───────────────────────┘ │
//! ├─────────────────────────────────────────┤
//! │ Record 2                                │
//! │ ┌─────────────┬───────────────────────┐ │
//! │ │ Len (4, LE) │ Payload (Len bytes)   │ │
//! │ └─────────────┴───────────────────────┘ │
//! └─────────────────────────────────────────┘
//! ```
//!
//! No file header, no version tag, no checksum. The length prefix is a
//! 4-byte little-endian signed integer; a record's offset points at its
//! length prefix. Records are immutable once written.

mod writer;
mod reader;

pub use writer::LogWriter;
pub use reader::{LogReader, RecordIter};

/// Size of the length prefix preceding every payload
pub const LENGTH_PREFIX_SIZE: u64 = 4;

/// Maximum payload size representable by the signed 32-bit length prefix
pub const MAX_PAYLOAD_LEN: usize = i32::MAX as usize;
