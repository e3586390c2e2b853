//! Snapshot assembly
//!
//! Writes header, database selector, records, end marker and CRC-64 trailer
//! into an in-memory `ByteStream`. The checksum is updated as bytes are
//! appended, so it always covers exactly the bytes before the trailer.
//!
//! A conversion either yields the complete, checksummed file or an error;
//! `write_to` only touches the sink after assembly succeeded.

use std::io::{self, Write};

use byteorder::WriteBytesExt;
use rdbdump_core::{Document, Result, SnapshotEntry, SnapshotVersion};
use tracing::{debug, info, trace};

use crate::checksum::Crc64;
use crate::classify::classify;
use crate::config::{ChecksumByteOrder, SnapshotConfig};
use crate::format::{encode_entry, encode_length, opcodes, RDB_DEFAULT_DB, RDB_MAGIC};

// ============================================================================
// Byte Stream
// ============================================================================

/// Append-only output buffer with a running checksum
///
/// Owned by one assembly run. `finish` appends the trailer and consumes the
/// stream, so no bytes can follow the checksum.
#[derive(Debug, Default)]
pub struct ByteStream {
    buf: Vec<u8>,
    crc: Crc64,
}

impl ByteStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Checksum of the bytes written so far
    pub fn checksum(&self) -> u64 {
        self.crc.value()
    }

    /// Append the checksum trailer and hand off the bytes
    pub fn finish(self, order: ChecksumByteOrder) -> Vec<u8> {
        let mut buf = self.buf;
        buf.extend_from_slice(&order.to_bytes(self.crc.value()));
        buf
    }
}

impl Write for ByteStream {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        self.crc.update(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Snapshot Assembler
// ============================================================================

/// Summary of an assembled snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    /// Header version
    pub version: SnapshotVersion,
    /// Number of records written
    pub entries: usize,
    /// Total file size including the trailer
    pub size_bytes: usize,
    /// CRC-64 of everything before the trailer
    pub checksum: u64,
}

/// Builds complete snapshot files from documents
#[derive(Debug, Clone, Default)]
pub struct SnapshotAssembler {
    config: SnapshotConfig,
}

impl SnapshotAssembler {
    /// Create an assembler with the given configuration
    pub fn new(config: SnapshotConfig) -> Self {
        SnapshotAssembler { config }
    }

    /// Active configuration
    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Encode a document into snapshot bytes
    ///
    /// Top-level keys are written in document order.
    pub fn assemble(&self, doc: &Document) -> Result<Vec<u8>> {
        self.assemble_with_info(doc).map(|(bytes, _)| bytes)
    }

    /// Encode a document and report what was written
    pub fn assemble_with_info(&self, doc: &Document) -> Result<(Vec<u8>, SnapshotInfo)> {
        let entries = doc.iter().map(|(key, node)| classify(key, node));
        self.assemble_entries(entries)
    }

    /// Encode already classified entries
    ///
    /// The first error aborts assembly and the partial buffer is dropped.
    pub fn assemble_entries<I>(&self, entries: I) -> Result<(Vec<u8>, SnapshotInfo)>
    where
        I: IntoIterator<Item = Result<SnapshotEntry>>,
    {
        let mut stream = ByteStream::new();
        self.write_header(&mut stream)?;

        let mut count = 0;
        for entry in entries {
            let entry = entry?;
            trace!(
                key = %String::from_utf8_lossy(&entry.key),
                kind = %entry.kind(),
                offset = stream.len(),
                "Encoding record"
            );
            encode_entry(&entry, &self.config.limits, &mut stream)?;
            count += 1;
        }

        stream.write_u8(opcodes::EOF)?;

        let checksum = stream.checksum();
        let bytes = stream.finish(self.config.checksum_order);

        let info = SnapshotInfo {
            version: self.config.version,
            entries: count,
            size_bytes: bytes.len(),
            checksum,
        };

        info!(
            version = %info.version,
            entries = info.entries,
            size_bytes = info.size_bytes,
            checksum = %format!("{:#018x}", checksum),
            "Snapshot assembled"
        );

        Ok((bytes, info))
    }

    /// Assemble a document, then write it to `sink`
    ///
    /// Nothing reaches the sink if assembly fails.
    pub fn write_to<W: Write>(&self, doc: &Document, sink: &mut W) -> Result<SnapshotInfo> {
        let (bytes, info) = self.assemble_with_info(doc)?;
        sink.write_all(&bytes)?;
        sink.flush()?;
        debug!(size_bytes = bytes.len(), "Snapshot flushed to sink");
        Ok(info)
    }

    fn write_header(&self, stream: &mut ByteStream) -> Result<()> {
        stream.write_all(RDB_MAGIC)?;
        stream.write_all(self.config.version.as_bytes())?;
        stream.write_u8(opcodes::SELECTDB)?;
        encode_length(RDB_DEFAULT_DB, stream)?;
        Ok(())
    }
}
