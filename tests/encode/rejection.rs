//! Documents outside the supported shape abort the whole conversion.

use crate::common::*;
use rdbdump::Error;

fn assert_rejected(doc: &Document) {
    let mut sink = Vec::new();
    let result = rdbdump::encode_document_to(doc, SnapshotVersion::default(), &mut sink);
    assert!(
        matches!(result, Err(Error::UnsupportedStructure { .. })),
        "expected rejection, got {result:?}"
    );
    assert!(sink.is_empty(), "rejected document produced {} bytes", sink.len());
}

#[test]
fn table_within_table() {
    let doc = Document::new().with(
        "outer",
        Node::Table(vec![("inner".into(), Node::table([("k", "v")]))]),
    );
    assert_rejected(&doc);
}

#[test]
fn array_within_table() {
    let doc = Document::new().with(
        "outer",
        Node::Table(vec![("list".into(), Node::array(["a"]))]),
    );
    assert_rejected(&doc);
}

#[test]
fn table_within_array() {
    let doc = Document::new().with(
        "items",
        Node::Array(vec![Node::scalar("a"), Node::table([("k", "v")])]),
    );
    assert_rejected(&doc);
}

#[test]
fn duplicate_set_members() {
    assert_rejected(&Document::new().with("s", Node::array(["a", "b", "a"])));
}

#[test]
fn bad_key_after_good_keys_discards_everything() {
    let doc = sample_document().with(
        "broken",
        Node::Array(vec![Node::array(["nested"])]),
    );
    assert_rejected(&doc);
}
