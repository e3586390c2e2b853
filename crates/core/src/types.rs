//! Snapshot entry types
//!
//! A `SnapshotEntry` is one top-level key after classification: the key bytes
//! and a typed payload. Entries are derived from a `Document`, encoded once,
//! and dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of value stored under a key
///
/// The discriminants are the store's canonical type identifiers and are
/// written verbatim as the record type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum EntryKind {
    /// Plain string value
    String = 0x00,
    /// Unordered collection of unique members
    Set = 0x02,
    /// Field/value map
    Hash = 0x04,
}

impl EntryKind {
    /// Record type tag for this kind
    pub const fn type_tag(self) -> u8 {
        self as u8
    }

    /// Map a record type tag back to a kind
    pub fn from_type_tag(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(EntryKind::String),
            0x02 => Some(EntryKind::Set),
            0x04 => Some(EntryKind::Hash),
            _ => None,
        }
    }

    /// Lowercase name, matching the store's `TYPE` command output
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::String => "string",
            EntryKind::Set => "set",
            EntryKind::Hash => "hash",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed payload of a snapshot entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Single value
    String(Vec<u8>),
    /// Field/value pairs in input order
    Hash(Vec<(Vec<u8>, Vec<u8>)>),
    /// Members in input order
    Set(Vec<Vec<u8>>),
}

/// One classified top-level key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    /// Key bytes
    pub key: Vec<u8>,
    /// Value
    pub payload: Payload,
}

impl SnapshotEntry {
    /// Create a string entry
    pub fn string(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        SnapshotEntry {
            key: key.into(),
            payload: Payload::String(value.into()),
        }
    }

    /// Create a hash entry
    pub fn hash(key: impl Into<Vec<u8>>, pairs: Vec<(Vec<u8>, Vec<u8>)>) -> Self {
        SnapshotEntry {
            key: key.into(),
            payload: Payload::Hash(pairs),
        }
    }

    /// Create a set entry
    pub fn set(key: impl Into<Vec<u8>>, members: Vec<Vec<u8>>) -> Self {
        SnapshotEntry {
            key: key.into(),
            payload: Payload::Set(members),
        }
    }

    /// Kind of this entry
    pub fn kind(&self) -> EntryKind {
        match self.payload {
            Payload::String(_) => EntryKind::String,
            Payload::Hash(_) => EntryKind::Hash,
            Payload::Set(_) => EntryKind::Set,
        }
    }
}
