//! Log Writer
//!
//! Owns the write cursor and appends length-prefixed records.

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::SyncStrategy;
use crate::error::{DexError, Result};

use super::{LENGTH_PREFIX_SIZE, MAX_PAYLOAD_LEN};

/// Appends records to the log file
///
/// The writer is the single owner of the write cursor (`next_offset`).
/// Reads never go through this handle; see `LogReader`.
pub struct LogWriter {
    /// Write handle, positioned at end-of-file between appends
    file: File,

    /// Offset at which the next record will start
    next_offset: u64,

    /// When to fsync
    sync_strategy: SyncStrategy,
}

impl LogWriter {
    /// Open an existing log for appending, or create it if absent
    ///
    /// The write cursor is set to the discovered file length; an existing
    /// file is never truncated.
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;

        let next_offset = file.seek(SeekFrom::End(0))?;

        Ok(Self {
            file,
            next_offset,
            sync_strategy,
        })
    }

    /// Append a payload, returning the offset of its length prefix
    ///
    /// Writes a 4-byte little-endian length followed by the payload, then
    /// advances the cursor by `4 + payload.len()`. Offsets are therefore
    /// strictly monotonic across appends.
    pub fn append(&mut self, payload: &[u8]) -> Result<u64> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(DexError::RecordTooLarge(payload.len()));
        }

        let offset = self.next_offset;
        let length = payload.len() as i32;

        self.file.write_all(&length.to_le_bytes())?;
        self.file.write_all(payload)?;

        self.next_offset += LENGTH_PREFIX_SIZE + payload.len() as u64;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            self.file.sync_data()?;
        }

        Ok(offset)
    }

    /// Offset at which the next append will land (current file length)
    pub fn next_offset(&self) -> u64 {
        self.next_offset
    }

    /// Flush and fsync the log
    pub fn sync(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }
}
