//! rdbdump - Encode normalized documents into Redis RDB snapshot files
//!
//! A document is an ordered map of top-level keys. Each key becomes one record:
//! scalars become strings, flat tables become hashes, flat arrays become sets.
//! The output is a single-database version-N snapshot with a CRC-64 trailer.
//!
//! # Quick Start
//!
//! ```
//! use rdbdump::{encode_document, Document, Node, SnapshotVersion};
//!
//! let doc = Document::new().with("title", Node::scalar("TOML File"));
//! let bytes = encode_document(&doc, SnapshotVersion::default())?;
//! assert!(bytes.starts_with(b"REDIS0007"));
//! # Ok::<(), rdbdump::Error>(())
//! ```
//!
//! # Architecture
//!
//! Types live in `rdbdump-core`, the byte-level format and the reference
//! reader in `rdbdump-durability`. This crate re-exports both.

pub use rdbdump_core::*;
pub use rdbdump_durability::{
    classify, crc64, ChecksumByteOrder, Crc64, DecodedSnapshot, SnapshotAssembler,
    SnapshotConfig, SnapshotFileWriter, SnapshotInfo, SnapshotReadError, SnapshotReader,
};

/// Encode a document into snapshot bytes with the default limits and a
/// big-endian checksum trailer.
///
/// Either the full snapshot is returned or an error; no partial output.
pub fn encode_document(doc: &Document, version: SnapshotVersion) -> Result<Vec<u8>> {
    SnapshotAssembler::new(SnapshotConfig::default().with_version(version)).assemble(doc)
}

/// Encode a document and write it to `sink`.
///
/// The sink receives nothing if the document cannot be encoded.
pub fn encode_document_to<W: std::io::Write>(
    doc: &Document,
    version: SnapshotVersion,
    sink: &mut W,
) -> Result<SnapshotInfo> {
    SnapshotAssembler::new(SnapshotConfig::default().with_version(version)).write_to(doc, sink)
}
