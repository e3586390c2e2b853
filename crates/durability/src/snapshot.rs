//! Snapshot assembly and decoding
//!
//! - `writer`: `SnapshotAssembler` turns a `Document` into snapshot bytes
//! - `reader`: `SnapshotReader` decodes and verifies them
//!
//! ## Usage
//!
//! ```ignore
//! let doc = Document::new().with("title", Node::scalar("TOML File"));
//! let bytes = SnapshotAssembler::new(SnapshotConfig::default()).assemble(&doc)?;
//! let decoded = SnapshotReader::new().decode(&bytes)?;
//! assert_eq!(decoded.len(), 1);
//! ```

pub mod reader;
pub mod writer;

pub use reader::{DecodedSnapshot, SnapshotReadError, SnapshotReader, MIN_SNAPSHOT_SIZE};
pub use writer::{ByteStream, SnapshotAssembler, SnapshotInfo};
