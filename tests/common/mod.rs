//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

pub use rdbdump::{
    encode_document, Document, EntryKind, Node, Payload, SnapshotReader, SnapshotVersion,
};

/// Encode with the default version.
pub fn encode(doc: &Document) -> Vec<u8> {
    encode_document(doc, SnapshotVersion::default()).unwrap()
}

/// The big-endian trailer value of a snapshot.
pub fn trailer(bytes: &[u8]) -> u64 {
    u64::from_be_bytes(bytes[bytes.len() - 8..].try_into().unwrap())
}

/// Everything before the trailer.
pub fn body(bytes: &[u8]) -> &[u8] {
    &bytes[..bytes.len() - 8]
}

/// Assert the trailer is the Jones CRC-64 of the body, using an independent implementation.
pub fn assert_checksum_valid(bytes: &[u8]) {
    assert_eq!(
        trailer(bytes),
        crc64::crc64(0, body(bytes)),
        "trailer does not match CRC-64 of {} body bytes",
        bytes.len() - 8
    );
}

/// A document resembling a typical TOML configuration file.
pub fn sample_document() -> Document {
    Document::new()
        .with("title", Node::scalar("TOML Example"))
        .with(
            "owner",
            Node::table([("name", "Tom Preston-Werner"), ("dob", "1979-05-27T07:32:00-08:00")]),
        )
        .with(
            "database",
            Node::table([("server", "192.168.1.1"), ("connection_max", "5000"), ("enabled", "true")]),
        )
        .with("ports", Node::array(["8000", "8001", "8002"]))
}
