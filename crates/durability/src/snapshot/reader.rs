//! Reference snapshot reader
//!
//! Decodes the subset of the RDB format this crate writes: one database
//! selector for db 0, string/set/hash records with plain string encodings,
//! the end marker, and the CRC-64 trailer. Used by `rdbdump inspect` and by
//! the round-trip tests.
//!
//! The trailer is accepted in either byte order; an all-zero trailer means
//! the writer disabled checksumming and is not verified.

use std::io;
use std::path::Path;

use rdbdump_core::{EntryKind, SnapshotEntry, SnapshotVersion};
use thiserror::Error;
use tracing::debug;

use crc64::crc64;
use crate::config::ChecksumByteOrder;
use crate::format::{
    decode_entry_body, decode_length, opcodes, RDB_CHECKSUM_SIZE, RDB_HEADER_SIZE, RDB_MAGIC,
};

/// Smallest valid file: header + end marker + trailer
pub const MIN_SNAPSHOT_SIZE: usize = RDB_HEADER_SIZE + 1 + RDB_CHECKSUM_SIZE;

/// Errors while decoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotReadError {
    /// I/O error reading the file
    #[error("I/O error: {0}")]
    Io(io::Error),

    /// Input ended in the middle of a structure
    #[error("Snapshot truncated")]
    Truncated,

    /// File shorter than the smallest possible snapshot
    #[error("Snapshot too small: {size} bytes")]
    FileTooSmall {
        /// Actual size
        size: usize,
    },

    /// Magic bytes are not "REDIS"
    #[error("Invalid magic: {actual:?}")]
    InvalidMagic {
        /// Bytes found instead
        actual: Vec<u8>,
    },

    /// Version field is not four ASCII digits
    #[error("Invalid version digits: {0:?}")]
    InvalidVersion(Vec<u8>),

    /// Trailer does not match the content
    #[error("Checksum mismatch: computed {computed:#018x}, stored {stored:#018x}")]
    ChecksumMismatch {
        /// CRC-64 of the content
        computed: u64,
        /// Trailer read as big-endian
        stored: u64,
    },

    /// Opcode or type tag outside the supported subset
    #[error("Unsupported opcode or type tag: {0:#04x}")]
    UnknownOpcode(u8),

    /// Length prefix announces one of the special string encodings
    #[error("Unsupported special string encoding: {0}")]
    SpecialEncoding(u8),

    /// Length prefix with an unknown marker byte
    #[error("Invalid length prefix: {0:#04x}")]
    InvalidLengthPrefix(u8),

    /// Selector for a database other than 0
    #[error("Unsupported database index: {0}")]
    UnsupportedDatabase(u64),

    /// Data after the end marker and before the trailer
    #[error("{0} unexpected bytes after end marker")]
    TrailingBytes(usize),
}

impl From<io::Error> for SnapshotReadError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            SnapshotReadError::Truncated
        } else {
            SnapshotReadError::Io(e)
        }
    }
}

/// A decoded snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSnapshot {
    /// Header version
    pub version: SnapshotVersion,
    /// Records in file order
    pub entries: Vec<SnapshotEntry>,
    /// Stored CRC-64 value
    pub checksum: u64,
    /// Trailer byte order, `None` if checksumming was disabled
    pub checksum_order: Option<ChecksumByteOrder>,
}

impl DecodedSnapshot {
    /// Look up a record by key
    pub fn get(&self, key: &[u8]) -> Option<&SnapshotEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Snapshot reader
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotReader;

impl SnapshotReader {
    /// Create a new reader
    pub fn new() -> Self {
        SnapshotReader
    }

    /// Load and decode a snapshot file
    pub fn load(&self, path: &Path) -> Result<DecodedSnapshot, SnapshotReadError> {
        let data = std::fs::read(path)?;
        debug!(path = %path.display(), size_bytes = data.len(), "Loaded snapshot file");
        self.decode(&data)
    }

    /// Decode snapshot bytes
    ///
    /// Validates the trailer before parsing any records.
    pub fn decode(&self, data: &[u8]) -> Result<DecodedSnapshot, SnapshotReadError> {
        if data.len() < MIN_SNAPSHOT_SIZE {
            return Err(SnapshotReadError::FileTooSmall { size: data.len() });
        }

        let (body, trailer) = data.split_at(data.len() - RDB_CHECKSUM_SIZE);
        let mut stored = [0u8; RDB_CHECKSUM_SIZE];
        stored.copy_from_slice(trailer);
        let (checksum, checksum_order) = verify_trailer(body, stored)?;

        let (magic, rest) = body.split_at(RDB_MAGIC.len());
        if magic != RDB_MAGIC {
            return Err(SnapshotReadError::InvalidMagic {
                actual: magic.to_vec(),
            });
        }

        let (digits, mut input) = rest.split_at(RDB_HEADER_SIZE - RDB_MAGIC.len());
        let version = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| SnapshotVersion::parse(s).ok())
            .ok_or_else(|| SnapshotReadError::InvalidVersion(digits.to_vec()))?;

        let mut entries = Vec::new();
        loop {
            let (&opcode, rest) = input.split_first().ok_or(SnapshotReadError::Truncated)?;
            input = rest;
            match opcode {
                opcodes::EOF => {
                    if !input.is_empty() {
                        return Err(SnapshotReadError::TrailingBytes(input.len()));
                    }
                    break;
                }
                opcodes::SELECTDB => {
                    let db = decode_length(&mut input)?;
                    if db != 0 {
                        return Err(SnapshotReadError::UnsupportedDatabase(db));
                    }
                }
                tag => {
                    let kind =
                        EntryKind::from_type_tag(tag).ok_or(SnapshotReadError::UnknownOpcode(tag))?;
                    entries.push(decode_entry_body(kind, &mut input)?);
                }
            }
        }

        Ok(DecodedSnapshot {
            version,
            entries,
            checksum,
            checksum_order,
        })
    }
}

fn verify_trailer(
    body: &[u8],
    stored: [u8; RDB_CHECKSUM_SIZE],
) -> Result<(u64, Option<ChecksumByteOrder>), SnapshotReadError> {
    if stored == [0u8; RDB_CHECKSUM_SIZE] {
        return Ok((0, None));
    }

    let computed = crc64(0, body);
    for order in [ChecksumByteOrder::BigEndian, ChecksumByteOrder::LittleEndian] {
        if order.decode(stored) == computed {
            return Ok((computed, Some(order)));
        }
    }

    Err(SnapshotReadError::ChecksumMismatch {
        computed,
        stored: u64::from_be_bytes(stored),
    })
}
