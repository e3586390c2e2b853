//! Canonical single-record documents with pinned bytes.

use crate::common::*;

#[test]
fn single_string_record() {
    let bytes = encode(&Document::new().with("title", Node::scalar("TOML File")));

    assert_eq!(body(&bytes), b"REDIS0007\xfe\x00\x00\x05title\x09TOML File\xff");
    assert_eq!(trailer(&bytes), 0xe4c0_954d_ac76_631f);
    assert_checksum_valid(&bytes);
}

#[test]
fn single_hash_record() {
    let bytes = encode(&Document::new().with("table", Node::table([("k", "v")])));

    assert_eq!(body(&bytes), b"REDIS0007\xfe\x00\x04\x05table\x01\x01k\x01v\xff");
    assert_eq!(trailer(&bytes), 0xf72c_fa0e_ab7c_37b8);
}

#[test]
fn single_set_record() {
    let bytes = encode(&Document::new().with("set", Node::array(["a", "b"])));

    assert_eq!(body(&bytes), b"REDIS0007\xfe\x00\x02\x03set\x02\x01a\x01b\xff");
    assert_eq!(trailer(&bytes), 0x1eb4_8175_d2c9_ff8e);
}

#[test]
fn empty_document() {
    let bytes = encode(&Document::new());

    assert_eq!(bytes.len(), 20);
    assert_eq!(body(&bytes), b"REDIS0007\xfe\x00\xff");
    assert_eq!(trailer(&bytes), 0xd9a0_6feb_f1f4_9f63);
}

#[test]
fn records_follow_document_order() {
    let doc = Document::new()
        .with("z", Node::scalar("1"))
        .with("a", Node::array(["x"]))
        .with("m", Node::table([("f", "v")]));
    let bytes = encode(&doc);

    let decoded = SnapshotReader::new().decode(&bytes).unwrap();
    let kinds: Vec<(&[u8], EntryKind)> = decoded
        .entries
        .iter()
        .map(|e| (e.key.as_slice(), e.kind()))
        .collect();
    assert_eq!(
        kinds,
        [
            (&b"z"[..], EntryKind::String),
            (&b"a"[..], EntryKind::Set),
            (&b"m"[..], EntryKind::Hash),
        ]
    );
}

#[test]
fn version_only_changes_header_digits() {
    let doc = sample_document();
    let v7 = encode(&doc);
    let v11 = encode_document(&doc, SnapshotVersion::from_major(11).unwrap()).unwrap();

    assert_eq!(&v11[..9], b"REDIS0011");
    assert_eq!(&v7[9..v7.len() - 8], &v11[9..v11.len() - 8]);
    assert_checksum_valid(&v11);
}

#[test]
fn encode_to_sink_matches_buffer() {
    let doc = sample_document();
    let mut sink = Vec::new();
    let info = rdbdump::encode_document_to(&doc, SnapshotVersion::default(), &mut sink).unwrap();

    assert_eq!(sink, encode(&doc));
    assert_eq!(info.entries, 4);
    assert_eq!(info.size_bytes, sink.len());
    assert_eq!(info.checksum, trailer(&sink));
}
