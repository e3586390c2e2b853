//! On-disk byte format of RDB snapshots.
//!
//! This module centralizes all serialization logic. Keeping the byte layout
//! separate from assembly (ordering, checksumming, output) keeps the wire
//! rules in one place.
//!
//! # File Layout
//!
//! ```text
//! "REDIS" + 4 version digits                  header (9 bytes)
//! 0xFE <len(0)>                               select database 0
//! { type tag, key blob, payload } *           records
//! 0xFF                                        end of file
//! CRC-64 (8 bytes)                            trailer
//! ```
//!
//! # Module Structure
//!
//! - `length`: variable-width length prefixes
//! - `string`: length-prefixed blobs
//! - `record`: one key with its typed payload

pub mod length;
pub mod record;
pub mod string;

pub use length::{decode_length, encode_length, encode_length_u64, encoded_length_size};
pub use record::{decode_entry, decode_entry_body, encode_entry};
pub use string::{decode_bytes, encode_bytes};

/// Magic bytes at the start of every snapshot
pub const RDB_MAGIC: &[u8; 5] = b"REDIS";

/// Magic plus four version digits
pub const RDB_HEADER_SIZE: usize = 9;

/// Size of the CRC-64 trailer
pub const RDB_CHECKSUM_SIZE: usize = 8;

/// Index of the only logical database written
pub const RDB_DEFAULT_DB: usize = 0;

/// Opcodes that frame the record stream
pub mod opcodes {
    /// Database selector, followed by a length-encoded index
    pub const SELECTDB: u8 = 0xFE;
    /// End of the record stream, followed by the checksum
    pub const EOF: u8 = 0xFF;
}

/// Record type tags for the supported value kinds
pub mod type_tags {
    use rdbdump_core::EntryKind;

    /// Plain string
    pub const STRING: u8 = EntryKind::String.type_tag();
    /// Set of members
    pub const SET: u8 = EntryKind::Set.type_tag();
    /// Hash of field/value pairs
    pub const HASH: u8 = EntryKind::Hash.type_tag();
}
