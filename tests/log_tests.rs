//! Tests for the append log
//!
//! These tests verify:
//! - Offset assignment and monotonicity
//! - Random-access reads on independent handles
//! - Reopening an existing log without truncation
//! - Corruption detection (truncated payloads, bad length prefixes)

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use dialdex::config::SyncStrategy;
use dialdex::error::DexError;
use dialdex::log::{LogReader, LogWriter, LENGTH_PREFIX_SIZE};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_log() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("test.dat");
    (temp_dir, log_path)
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_returns_prewrite_offset() {
    let (_temp, log_path) = setup_temp_log();

    let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();

    let off1 = writer.append(b"hello").unwrap();
    let off2 = writer.append(b"world!").unwrap();

    assert_eq!(off1, 0);
    assert_eq!(off2, LENGTH_PREFIX_SIZE + 5);
    assert_eq!(writer.next_offset(), off2 + LENGTH_PREFIX_SIZE + 6);
}

#[test]
fn test_offsets_strictly_monotonic() {
    let (_temp, log_path) = setup_temp_log();

    let mut writer = LogWriter::open(&log_path, SyncStrategy::OnClose).unwrap();

    let mut last = None;
    for i in 0..100 {
        let offset = writer.append(format!("payload {}", i).as_bytes()).unwrap();
        if let Some(prev) = last {
            assert!(offset > prev);
        }
        last = Some(offset);
    }
}

#[test]
fn test_empty_payload() {
    let (_temp, log_path) = setup_temp_log();

    let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
    let offset = writer.append(b"").unwrap();

    let mut reader = LogReader::open(&log_path).unwrap();
    assert_eq!(reader.read_at(offset).unwrap(), b"");
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_read_at_round_trip() {
    let (_temp, log_path) = setup_temp_log();

    let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
    let off1 = writer.append(b"first record").unwrap();
    let off2 = writer.append(b"second record").unwrap();

    let mut reader = LogReader::open(&log_path).unwrap();
    assert_eq!(reader.read_at(off2).unwrap(), b"second record");
    assert_eq!(reader.read_at(off1).unwrap(), b"first record");
}

#[test]
fn test_reads_see_writes_after_open() {
    let (_temp, log_path) = setup_temp_log();

    let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
    writer.append(b"old").unwrap();

    // Reader opened before the second append must still see it: file
    // length is checked per read, not captured at open.
    let mut reader = LogReader::open(&log_path).unwrap();
    let off = writer.append(b"new").unwrap();

    assert_eq!(reader.read_at(off).unwrap(), b"new");
}

#[test]
fn test_read_at_huge_offset() {
    let (_temp, log_path) = setup_temp_log();

    let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
    writer.append(b"data").unwrap();

    // Offsets near u64::MAX must not wrap around the bounds checks
    let mut reader = LogReader::open(&log_path).unwrap();
    assert!(matches!(
        reader.read_at(u64::MAX),
        Err(DexError::CorruptRecord { .. })
    ));
    assert!(matches!(
        reader.read_at(u64::MAX - LENGTH_PREFIX_SIZE),
        Err(DexError::CorruptRecord { .. })
    ));
}

#[test]
fn test_read_at_past_eof() {
    let (_temp, log_path) = setup_temp_log();

    let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
    writer.append(b"data").unwrap();

    let mut reader = LogReader::open(&log_path).unwrap();
    assert!(matches!(
        reader.read_at(10_000),
        Err(DexError::CorruptRecord { .. })
    ));
}

// =============================================================================
// Reopen Tests
// =============================================================================

#[test]
fn test_reopen_appends_at_end() {
    let (_temp, log_path) = setup_temp_log();

    let first_end;
    {
        let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
        writer.append(b"run one").unwrap();
        first_end = writer.next_offset();
        writer.sync().unwrap();
    }

    let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
    assert_eq!(writer.next_offset(), first_end);

    let offset = writer.append(b"run two").unwrap();
    assert_eq!(offset, first_end);

    // Both records readable
    let mut reader = LogReader::open(&log_path).unwrap();
    assert_eq!(reader.read_at(0).unwrap(), b"run one");
    assert_eq!(reader.read_at(first_end).unwrap(), b"run two");
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_truncated_payload_detected() {
    let (_temp, log_path) = setup_temp_log();

    let offset;
    {
        let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
        writer.append(b"intact").unwrap();
        offset = writer.append(b"this payload will be cut short").unwrap();
    }

    // Cut the file after the second record's length prefix, mid-payload
    let file = OpenOptions::new().write(true).open(&log_path).unwrap();
    file.set_len(offset + LENGTH_PREFIX_SIZE + 5).unwrap();

    let mut reader = LogReader::open(&log_path).unwrap();
    assert_eq!(reader.read_at(0).unwrap(), b"intact");
    assert!(matches!(
        reader.read_at(offset),
        Err(DexError::CorruptRecord { .. })
    ));
}

#[test]
fn test_negative_length_prefix_detected() {
    let (_temp, log_path) = setup_temp_log();

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .open(&log_path)
        .unwrap();
    file.write_all(&(-7i32).to_le_bytes()).unwrap();
    file.write_all(b"junk after the bad prefix").unwrap();
    drop(file);

    let mut reader = LogReader::open(&log_path).unwrap();
    assert!(matches!(
        reader.read_at(0),
        Err(DexError::CorruptRecord { .. })
    ));
}

// =============================================================================
// Sequential Iteration Tests
// =============================================================================

#[test]
fn test_records_iterates_in_write_order() {
    let (_temp, log_path) = setup_temp_log();

    let mut offsets = Vec::new();
    {
        let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
        for i in 0..10 {
            offsets.push(writer.append(format!("record {}", i).as_bytes()).unwrap());
        }
    }

    let reader = LogReader::open(&log_path).unwrap();
    let records: Vec<_> = reader
        .records()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(records.len(), 10);
    for (i, (offset, payload)) in records.iter().enumerate() {
        assert_eq!(*offset, offsets[i]);
        assert_eq!(payload, format!("record {}", i).as_bytes());
    }
}

#[test]
fn test_records_empty_file() {
    let (_temp, log_path) = setup_temp_log();

    LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();

    let reader = LogReader::open(&log_path).unwrap();
    assert_eq!(reader.records().unwrap().count(), 0);
}

#[test]
fn test_records_trailing_partial_record_errors() {
    let (_temp, log_path) = setup_temp_log();

    let offset;
    {
        let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
        writer.append(b"whole").unwrap();
        offset = writer.append(b"partial").unwrap();
    }

    let file = OpenOptions::new().write(true).open(&log_path).unwrap();
    file.set_len(offset + 2).unwrap(); // Not even a full length prefix

    let reader = LogReader::open(&log_path).unwrap();
    let results: Vec<_> = reader.records().unwrap().collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(DexError::CorruptRecord { .. })));
}

#[test]
fn test_records_ends_after_corrupt_tail() {
    let (_temp, log_path) = setup_temp_log();

    let offset;
    {
        let mut writer = LogWriter::open(&log_path, SyncStrategy::EveryWrite).unwrap();
        writer.append(b"whole").unwrap();
        offset = writer.append(b"cut short").unwrap();
    }

    // Truncate mid-payload of the last record
    let file = OpenOptions::new().write(true).open(&log_path).unwrap();
    file.set_len(offset + LENGTH_PREFIX_SIZE + 3).unwrap();

    // The error is yielded exactly once, then the iterator is exhausted;
    // a bounded drain must not see the same error repeated.
    let reader = LogReader::open(&log_path).unwrap();
    let results: Vec<_> = reader.records().unwrap().take(5).collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(DexError::CorruptRecord { .. })));

    let mut iter = LogReader::open(&log_path).unwrap().records().unwrap();
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().unwrap().is_err());
    assert!(iter.next().is_none());
}
