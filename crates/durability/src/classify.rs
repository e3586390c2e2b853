//! Mapping document nodes onto store value kinds
//!
//! | Node | Entry |
//! |---|---|
//! | `Scalar` | string |
//! | `Table` of scalars | hash (fields in input order) |
//! | `Array` of scalars | set (members in input order) |
//!
//! Only one level of nesting is representable. Anything deeper is rejected
//! with `UnsupportedStructure`, as are duplicate set members and duplicate
//! hash fields: both would be silently collapsed by the store.

use std::collections::HashSet;

use rdbdump_core::{Error, Node, Result, SnapshotEntry};

/// Classify one top-level key
pub fn classify(key: &str, node: &Node) -> Result<SnapshotEntry> {
    match node {
        Node::Scalar(text) => Ok(SnapshotEntry::string(key, text.as_bytes())),
        Node::Table(pairs) => classify_table(key, pairs),
        Node::Array(items) => classify_array(key, items),
    }
}

fn classify_table(key: &str, pairs: &[(String, Node)]) -> Result<SnapshotEntry> {
    let mut seen = HashSet::with_capacity(pairs.len());
    let mut fields = Vec::with_capacity(pairs.len());

    for (field, child) in pairs {
        let value = child.as_scalar().ok_or_else(|| {
            Error::unsupported(
                key,
                format!(
                    "field {field:?} holds a {} but hash values must be scalars",
                    child.shape_name()
                ),
            )
        })?;
        if !seen.insert(field.as_str()) {
            return Err(Error::unsupported(key, format!("duplicate hash field {field:?}")));
        }
        fields.push((field.as_bytes().to_vec(), value.as_bytes().to_vec()));
    }

    Ok(SnapshotEntry::hash(key, fields))
}

fn classify_array(key: &str, items: &[Node]) -> Result<SnapshotEntry> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut members = Vec::with_capacity(items.len());

    for (index, child) in items.iter().enumerate() {
        let member = child.as_scalar().ok_or_else(|| {
            Error::unsupported(
                key,
                format!(
                    "element {index} is a {} but set members must be scalars",
                    child.shape_name()
                ),
            )
        })?;
        if !seen.insert(member) {
            return Err(Error::unsupported(key, format!("duplicate set member {member:?}")));
        }
        members.push(member.as_bytes().to_vec());
    }

    Ok(SnapshotEntry::set(key, members))
}
