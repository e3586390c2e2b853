//! Snapshot encoding for rdbdump
//!
//! This crate handles everything that produces or checks snapshot bytes:
//!
//! - Format: length prefixes, blobs, records, framing opcodes
//! - Checksum: CRC-64 (Jones) trailer
//! - Classification: document nodes to string/hash/set entries
//! - Snapshot assembly and the reference reader
//! - Crash-safe file output

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checksum; // CRC-64 (Jones)
pub mod classify; // Node -> SnapshotEntry
pub mod config; // SnapshotConfig, ChecksumByteOrder
pub mod disk_snapshot; // Atomic file writer
pub mod format; // Binary on-disk format
pub mod snapshot; // Assembler and reader

// === Re-exports ===
pub use checksum::{crc64, Crc64, JONES_POLY};
pub use classify::classify;
pub use config::{ChecksumByteOrder, ConfigError, SnapshotConfig};
pub use disk_snapshot::SnapshotFileWriter;
pub use format::{
    encode_bytes, encode_entry, encode_length, encoded_length_size, opcodes, type_tags,
    RDB_CHECKSUM_SIZE, RDB_HEADER_SIZE, RDB_MAGIC,
};
pub use snapshot::{
    ByteStream, DecodedSnapshot, SnapshotAssembler, SnapshotInfo, SnapshotReadError,
    SnapshotReader,
};
