//! Encoded snapshots decode back to the source document.

use crate::common::*;
use proptest::prelude::*;

fn to_entries(doc: &Document) -> Vec<(Vec<u8>, Payload)> {
    doc.iter()
        .map(|(key, node)| {
            let entry = rdbdump::classify(key, node).unwrap();
            (entry.key, entry.payload)
        })
        .collect()
}

#[test]
fn sample_document_round_trips() {
    let doc = sample_document();
    let bytes = encode(&doc);
    assert_checksum_valid(&bytes);

    let decoded = SnapshotReader::new().decode(&bytes).unwrap();
    let recovered: Vec<(Vec<u8>, Payload)> = decoded
        .entries
        .into_iter()
        .map(|e| (e.key, e.payload))
        .collect();
    assert_eq!(recovered, to_entries(&doc));
}

#[test]
fn utf8_and_empty_values_round_trip() {
    let doc = Document::new()
        .with("", Node::scalar(""))
        .with("ключ", Node::scalar("значение ✓"))
        .with("empty_set", Node::Array(Vec::new()))
        .with("empty_hash", Node::Table(Vec::new()));
    let bytes = encode(&doc);

    let decoded = SnapshotReader::new().decode(&bytes).unwrap();
    assert_eq!(decoded.len(), 4);
    assert_eq!(
        decoded.get("ключ".as_bytes()).unwrap().payload,
        Payload::String("значение ✓".as_bytes().to_vec())
    );
    assert_eq!(decoded.get(b"empty_set").unwrap().payload, Payload::Set(Vec::new()));
}

fn node() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[ -~]{0,80}".prop_map(Node::scalar),
        prop::collection::btree_map("[a-z]{1,6}", "[ -~]{0,20}", 0..8).prop_map(Node::table),
        prop::collection::btree_set("[ -~]{0,20}", 0..8).prop_map(Node::array),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::btree_map("[a-z_]{1,10}", node(), 0..12)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn any_flat_document_round_trips(doc in document()) {
        let bytes = encode(&doc);
        let decoded = SnapshotReader::new().decode(&bytes).unwrap();
        let recovered: Vec<(Vec<u8>, Payload)> =
            decoded.entries.into_iter().map(|e| (e.key, e.payload)).collect();
        prop_assert_eq!(recovered, to_entries(&doc));
    }

    #[test]
    fn encoding_is_deterministic(doc in document()) {
        prop_assert_eq!(encode(&doc), encode(&doc.clone()));
    }

    #[test]
    fn trailer_is_jones_crc64(doc in document()) {
        let bytes = encode(&doc);
        prop_assert_eq!(trailer(&bytes), crc64::crc64(0, body(&bytes)));
    }
}
