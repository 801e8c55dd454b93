use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use thiserror::Error;

use crate::record::{SensorRecord, RECORD_SIZE};

/// Failures reading or writing a record file.
///
/// An out-of-range index is reported separately from lower-level I/O so
/// callers can tell a bad request apart from a missing or unreadable file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record index {index} is out of range: file holds {available} complete records")]
    InvalidIndex { index: u64, available: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the full record sequence to `path` as one contiguous block,
/// creating the file if absent and truncating it if present.
///
/// On success the file holds exactly `records.len() * RECORD_SIZE` bytes in
/// input order. There is no header or footer, and no fsync: a crash
/// mid-write leaves a truncated file.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[SensorRecord]) -> Result<(), StoreError> {
    let mut buf = Vec::with_capacity(records.len() * RECORD_SIZE);
    for record in records {
        buf.extend_from_slice(&record.encode());
    }

    fs::write(path, &buf)?;
    Ok(())
}

/// Number of complete records in the file at `path`.
///
/// Trailing bytes that do not make up a whole record are not counted.
pub fn record_count<P: AsRef<Path>>(path: P) -> Result<u64, StoreError> {
    let len = fs::metadata(path)?.len();
    Ok(len / RECORD_SIZE as u64)
}

/// Read back the record at zero-based `index` by seeking to
/// `index * RECORD_SIZE` and decoding exactly one record.
///
/// Returns [`StoreError::InvalidIndex`] when the file does not hold a
/// complete record at that position, so an out-of-range request can never
/// yield a partial or silently wrong record.
pub fn read_record<P: AsRef<Path>>(path: P, index: u64) -> Result<SensorRecord, StoreError> {
    let mut file = File::open(&path)?;

    let available = file.metadata()?.len() / RECORD_SIZE as u64;
    if index >= available {
        return Err(StoreError::InvalidIndex { index, available });
    }

    file.seek(SeekFrom::Start(index * RECORD_SIZE as u64))?;

    let mut buf = [0u8; RECORD_SIZE];
    file.read_exact(&mut buf)?;

    Ok(SensorRecord::decode(&buf))
}
