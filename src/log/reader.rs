//! Log Reader
//!
//! Random-access and sequential reads over the log file.
//!
//! Every reader opens its own file handle, so concurrent reads never
//! observe or disturb the writer's cursor or each other's position.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{DexError, Result};

use super::LENGTH_PREFIX_SIZE;

/// Reads records from the log file by offset
pub struct LogReader {
    /// Independent read handle
    file: File,
}

impl LogReader {
    /// Open an independent read handle on the log
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self { file })
    }

    /// Read the record starting at `offset`
    ///
    /// Reads the 4-byte length prefix, then exactly that many payload
    /// bytes. Fails with `CorruptRecord` if `offset` does not point at a
    /// complete record: offset past end-of-file, negative length prefix,
    /// or a payload the file is too short to hold.
    pub fn read_at(&mut self, offset: u64) -> Result<Vec<u8>> {
        // File length is re-read per call: the writer may have appended
        // since this handle was opened.
        let file_len = self.file.metadata()?.len();

        // Checked arithmetic: a pathological offset near u64::MAX must
        // map to CorruptRecord, not wrap around.
        let payload_start = match offset.checked_add(LENGTH_PREFIX_SIZE) {
            Some(start) if start <= file_len => start,
            _ => {
                return Err(DexError::CorruptRecord {
                    offset,
                    reason: format!(
                        "offset past end of file (file is {} bytes)",
                        file_len
                    ),
                });
            }
        };

        self.file.seek(SeekFrom::Start(offset))?;

        let mut prefix = [0u8; LENGTH_PREFIX_SIZE as usize];
        self.file.read_exact(&mut prefix)?;

        let length = i32::from_le_bytes(prefix);
        if length < 0 {
            return Err(DexError::CorruptRecord {
                offset,
                reason: format!("negative length prefix: {}", length),
            });
        }

        let length = length as u64;
        if payload_start + length > file_len {
            return Err(DexError::CorruptRecord {
                offset,
                reason: format!(
                    "length prefix {} implies payload past end of file",
                    length
                ),
            });
        }

        let mut payload = vec![0u8; length as usize];
        self.file.read_exact(&mut payload)?;

        Ok(payload)
    }

    /// Iterate all records from offset 0 to end-of-file
    ///
    /// Yields `(offset, payload)` pairs in write order; used to rebuild
    /// the indexes when opening an existing log.
    pub fn records(self) -> Result<RecordIter> {
        let file_len = self.file.metadata()?.len();
        let mut file = self.file;
        file.seek(SeekFrom::Start(0))?;
        Ok(RecordIter {
            file,
            file_len,
            pos: 0,
        })
    }
}

/// Sequential iterator over `(offset, payload)` pairs
///
/// The iterator is fused on error: after yielding a `CorruptRecord` or
/// I/O error once, it yields `None`.
pub struct RecordIter {
    file: File,
    file_len: u64,
    pos: u64,
}

impl RecordIter {
    /// Exhaust the iterator so the error is yielded exactly once
    fn fail(&mut self, err: DexError) -> DexError {
        self.pos = self.file_len;
        err
    }
}

impl Iterator for RecordIter {
    type Item = Result<(u64, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.file_len {
            return None;
        }

        let offset = self.pos;

        if offset + LENGTH_PREFIX_SIZE > self.file_len {
            return Some(Err(self.fail(DexError::CorruptRecord {
                offset,
                reason: "truncated length prefix at end of file".to_string(),
            })));
        }

        let mut prefix = [0u8; LENGTH_PREFIX_SIZE as usize];
        if let Err(e) = self.file.read_exact(&mut prefix) {
            return Some(Err(self.fail(e.into())));
        }

        let length = i32::from_le_bytes(prefix);
        if length < 0 {
            return Some(Err(self.fail(DexError::CorruptRecord {
                offset,
                reason: format!("negative length prefix: {}", length),
            })));
        }

        let length = length as u64;
        if offset + LENGTH_PREFIX_SIZE + length > self.file_len {
            return Some(Err(self.fail(DexError::CorruptRecord {
                offset,
                reason: format!(
                    "length prefix {} implies payload past end of file",
                    length
                ),
            })));
        }

        let mut payload = vec![0u8; length as usize];
        if let Err(e) = self.file.read_exact(&mut payload) {
            return Some(Err(self.fail(e.into())));
        }

        self.pos = offset + LENGTH_PREFIX_SIZE + length;

        Some(Ok((offset, payload)))
    }
}
