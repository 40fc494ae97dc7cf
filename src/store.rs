//! Contact Store
//!
//! The core store that coordinates the append log and both trie indexes.
//!
//! ## Responsibilities
//! - Append encoded contacts to the log, then index the returned offset
//! - Serve exact-match lookups by phone number or full name
//! - Rebuild indexes from an existing log on open
//! - Reject operations after close

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, RwLock};

use crate::config::Config;
use crate::error::{DexError, Result};
use crate::index::Trie;
use crate::log::{LogReader, LogWriter};
use crate::record::{self, Contact};

/// The contact store
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Writes** (`add`): serialized by the writer mutex. Index updates
///   happen while the append lock is held, so index order always matches
///   log order and last-write-wins is well defined under concurrency.
///
/// - **Reads** (`search_by_phone`/`search_by_name`): take a read lock on
///   the relevant index, then open an independent file handle for the
///   record read. Reads never share seek state with the append cursor or
///   with each other.
pub struct ContactStore {
    /// Store configuration
    config: Config,

    /// Log file path, for opening per-read handles
    log_path: PathBuf,

    /// Append log writer (exclusive access, owns the write cursor)
    writer: Mutex<LogWriter>,

    /// Phone number → offset of the most recent record
    phone_index: RwLock<Trie>,

    /// Lowercased "first last" → offset of the most recent record
    name_index: RwLock<Trie>,

    /// Set by `close`; all operations fail afterwards
    closed: AtomicBool,
}

impl ContactStore {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Open/create the log file, cursor at end-of-file
    /// 2. Scan the log and rebuild both indexes (unless disabled)
    /// 3. Ready to serve requests
    pub fn open(config: Config) -> Result<Self> {
        let writer = LogWriter::open(&config.log_path, config.sync_strategy)?;

        let mut phone_index = Trie::new();
        let mut name_index = Trie::new();

        if config.rebuild_on_open && writer.next_offset() > 0 {
            let mut rebuilt = 0usize;
            let reader = LogReader::open(&config.log_path)?;
            for item in reader.records()? {
                // A record that cannot be read or decoded means the log is
                // corrupt; surface it rather than index a partial view.
                let (offset, payload) = item?;
                let contact = record::decode(&payload)?;
                phone_index.insert(&contact.phone_number, offset);
                name_index.insert(&contact.name_key(), offset);
                rebuilt += 1;
            }
            tracing::info!(
                records = rebuilt,
                path = %config.log_path.display(),
                "rebuilt indexes from existing log"
            );
        }

        Ok(Self {
            log_path: config.log_path.clone(),
            config,
            writer: Mutex::new(writer),
            phone_index: RwLock::new(phone_index),
            name_index: RwLock::new(name_index),
            closed: AtomicBool::new(false),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified log file path
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().log_path(path).build();
        Self::open(config)
    }

    /// Add a contact, returning the offset its record was written at
    ///
    /// Steps:
    /// 1. Encode the contact
    /// 2. Append to the log (single-writer lock)
    /// 3. Index the offset under the phone key and the lowercased name key
    pub fn add(&self, contact: &Contact) -> Result<u64> {
        self.check_open()?;

        let payload = record::encode(contact);

        // Index inserts stay under the append lock so a later append can
        // never have its index entry overwritten by an earlier one.
        let mut writer = self.writer.lock();
        let offset = writer.append(&payload)?;

        self.phone_index.write().insert(&contact.phone_number, offset);
        self.name_index.write().insert(&contact.name_key(), offset);

        tracing::debug!(offset, phone = %contact.phone_number, "added contact");

        Ok(offset)
    }

    /// Look up a contact by exact phone number
    ///
    /// Returns `Ok(None)` on an index miss; misses are not errors.
    pub fn search_by_phone(&self, phone_number: &str) -> Result<Option<Contact>> {
        self.check_open()?;

        let offset = match self.phone_index.read().lookup(phone_number) {
            Some(offset) => offset,
            None => return Ok(None),
        };

        self.contact_at(offset).map(Some)
    }

    /// Look up a contact by full name ("first last", case-insensitive)
    ///
    /// The query is lowercased to match the key policy used on insert.
    pub fn search_by_name(&self, name: &str) -> Result<Option<Contact>> {
        self.check_open()?;

        let key = name.to_lowercase();
        let offset = match self.name_index.read().lookup(&key) {
            Some(offset) => offset,
            None => return Ok(None),
        };

        self.contact_at(offset).map(Some)
    }

    /// Read and decode the record at a known offset
    ///
    /// Bypasses the indexes; records shadowed by a later write under the
    /// same key remain reachable this way.
    pub fn contact_at(&self, offset: u64) -> Result<Contact> {
        self.check_open()?;

        let mut reader = LogReader::open(&self.log_path)?;
        let payload = reader.read_at(offset)?;
        record::decode(&payload)
    }

    /// Close the store
    ///
    /// Flushes and fsyncs the log, then marks the store closed; every
    /// subsequent operation (including a second close) fails with
    /// `DexError::Closed`. The indexes are discarded with the store; they
    /// are never persisted.
    pub fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(DexError::Closed);
        }

        self.writer.lock().sync()?;

        tracing::info!(path = %self.log_path.display(), "store closed");

        Ok(())
    }

    fn check_open(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(DexError::Closed);
        }
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the log file path
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Offset at which the next record will be written (log length)
    pub fn next_offset(&self) -> u64 {
        self.writer.lock().next_offset()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
